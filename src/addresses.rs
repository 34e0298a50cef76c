//! Shipping addresses and the account profile that carries them.

use serde::{Deserialize, Serialize};

/// The account profile returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Backend account identifier.
    pub account_id: i64,

    /// Account email address.
    pub email: String,

    /// Display name.
    pub display_name: String,

    /// Saved shipping addresses.
    pub addresses: Vec<ShippingAddress>,
}

/// A saved shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Backend address identifier.
    pub address_id: i64,

    /// Recipient name.
    pub full_name: String,

    /// Contact phone number.
    pub phone: String,

    /// Street address.
    pub line1: String,

    /// District name.
    pub district: String,

    /// City or province name.
    pub city: String,

    /// Country name.
    pub country: String,

    /// Postal code.
    pub postal_code: String,

    /// Whether the account marked this address as its default.
    pub is_default: bool,
}

/// Minimal plausibility check for a contact phone number.
///
/// Accepts only digits, `+`, `(`, `)`, spaces and hyphens, requires at
/// least eight characters and at least one digit. Addresses failing this
/// check are excluded from checkout entirely.
#[must_use]
pub fn phone_is_plausible(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | ' ' | '-'));

    allowed && phone.chars().count() >= 8 && phone.chars().any(|c| c.is_ascii_digit())
}

/// The subset of addresses usable for checkout.
#[must_use]
pub fn usable_addresses(addresses: &[ShippingAddress]) -> Vec<ShippingAddress> {
    addresses
        .iter()
        .filter(|a| phone_is_plausible(&a.phone))
        .cloned()
        .collect()
}

/// Pick the address to pre-select among the usable ones: the default if
/// usable, otherwise the first usable, otherwise none.
#[must_use]
pub fn pick_default(usable: &[ShippingAddress]) -> Option<i64> {
    usable
        .iter()
        .find(|a| a.is_default)
        .or_else(|| usable.first())
        .map(|a| a.address_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn address(address_id: i64, phone: &str, is_default: bool) -> ShippingAddress {
        ShippingAddress {
            address_id,
            full_name: "Nguyễn Văn An".to_owned(),
            phone: phone.to_owned(),
            line1: "12 Lý Thường Kiệt".to_owned(),
            district: "Hoàn Kiếm".to_owned(),
            city: "Hà Nội".to_owned(),
            country: "Việt Nam".to_owned(),
            postal_code: "100000".to_owned(),
            is_default,
        }
    }

    #[test]
    fn plausible_phones_accepted() {
        assert!(phone_is_plausible("0912345678"));
        assert!(phone_is_plausible("+84 (24) 3826-1234"));
    }

    #[test]
    fn implausible_phones_rejected() {
        assert!(!phone_is_plausible(""), "empty");
        assert!(!phone_is_plausible("0912345"), "too short");
        assert!(!phone_is_plausible("有効な電話番号"), "non-ascii");
        assert!(!phone_is_plausible("091234567x"), "letter");
        assert!(!phone_is_plausible("+ (  ) - -"), "no digits");
    }

    #[test]
    fn usable_subset_excludes_bad_phones() {
        let addresses = vec![address(1, "0912345678", false), address(2, "invalid", true)];

        let usable = usable_addresses(&addresses);

        assert_eq!(usable.len(), 1);
        assert_eq!(usable.first().map(|a| a.address_id), Some(1));
    }

    #[test]
    fn default_wins_when_usable() {
        let usable = vec![address(1, "0912345678", false), address(2, "0987654321", true)];

        assert_eq!(pick_default(&usable), Some(2));
    }

    #[test]
    fn first_usable_wins_when_default_unusable() {
        // The unusable default never reaches this list.
        let usable = vec![address(1, "0912345678", false), address(3, "0987654321", false)];

        assert_eq!(pick_default(&usable), Some(1));
    }

    #[test]
    fn empty_usable_list_selects_none() {
        assert_eq!(pick_default(&[]), None);
    }
}
