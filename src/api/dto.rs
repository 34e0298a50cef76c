//! Wire representations of backend requests and responses.

use serde::{Deserialize, Serialize};

use crate::{
    addresses::{Profile, ShippingAddress},
    cart::models::CartLine,
    session::{AuthState, Identity},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartDto {
    pub items: Vec<CartItemDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemDto {
    pub cart_item_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: u64,
}

impl From<CartItemDto> for CartLine {
    fn from(item: CartItemDto) -> Self {
        CartLine {
            line_id: item.cart_item_id,
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateQuantityRequest {
    pub cart_item_id: i64,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileDto {
    pub account_id: i64,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub addresses: Vec<ShippingAddress>,
}

impl From<ProfileDto> for Profile {
    fn from(profile: ProfileDto) -> Self {
        Profile {
            account_id: profile.account_id,
            email: profile.email,
            display_name: profile.display_name,
            addresses: profile.addresses,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub account_id: i64,
    pub email: String,
    pub display_name: String,
}

impl From<LoginResponse> for AuthState {
    fn from(response: LoginResponse) -> Self {
        AuthState {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            identity: Identity {
                account_id: response.account_id,
                email: response.email,
                display_name: response.display_name,
            },
        }
    }
}

/// The composite payload submitted once per checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// The chosen shipping address.
    pub shipping_address_id: i64,

    /// Shipping fee in whole đồng; fixed at zero in this flow.
    pub shipping_fee: u64,

    /// Payment method; fixed at `"COD"` in this flow.
    pub method: String,

    /// Free-text comment assembled from the gift-note fields.
    pub comment: String,

    /// The selected lines, in cart order.
    pub items: Vec<OrderItem>,
}

/// One ordered product with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product identifier.
    pub product_id: i64,

    /// Ordered quantity.
    pub quantity: u32,
}

/// Backend acknowledgement of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Human-facing order code to display.
    pub order_code: String,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cart_dto_maps_to_lines() -> TestResult {
        let raw = r#"{"items":[{"cartItemId":5,"productId":10,"productName":"Hộp quà","quantity":2,"unitPrice":100000}]}"#;

        let cart: CartDto = serde_json::from_str(raw)?;
        let lines: Vec<CartLine> = cart.items.into_iter().map(Into::into).collect();

        assert_eq!(
            lines,
            vec![CartLine {
                line_id: 5,
                product_id: 10,
                product_name: "Hộp quà".to_owned(),
                quantity: 2,
                unit_price: 100_000,
            }]
        );

        Ok(())
    }

    #[test]
    fn order_request_serializes_camel_case() -> TestResult {
        let request = OrderRequest {
            shipping_address_id: 3,
            shipping_fee: 0,
            method: "COD".to_owned(),
            comment: "…".to_owned(),
            items: vec![OrderItem {
                product_id: 10,
                quantity: 2,
            }],
        };

        let value = serde_json::to_value(&request)?;

        assert_eq!(value["shippingAddressId"], 3);
        assert_eq!(value["shippingFee"], 0);
        assert_eq!(value["method"], "COD");
        assert_eq!(value["items"][0]["productId"], 10);

        Ok(())
    }

    #[test]
    fn profile_without_addresses_defaults_to_empty() -> TestResult {
        let raw = r#"{"accountId":1,"email":"an@example.com","displayName":"An"}"#;

        let profile: Profile = serde_json::from_str::<ProfileDto>(raw)?.into();

        assert!(profile.addresses.is_empty());

        Ok(())
    }
}
