//! Two-level province/district selection state for address forms.

use crate::geo::models::{District, Province};

/// Tracks a province choice and a district choice within it.
///
/// District codes are only unique within their parent province, so any
/// province change unconditionally resets the district.
#[derive(Debug, Default)]
pub struct ProvincePicker {
    provinces: Vec<Province>,
    selected_province: Option<String>,
    selected_district: Option<String>,
}

impl ProvincePicker {
    /// Create a picker over the given provinces.
    #[must_use]
    pub fn new(provinces: Vec<Province>) -> Self {
        Self {
            provinces,
            selected_province: None,
            selected_district: None,
        }
    }

    /// All provinces, in display order.
    #[must_use]
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    /// The currently selected province code, if any.
    #[must_use]
    pub fn selected_province(&self) -> Option<&str> {
        self.selected_province.as_deref()
    }

    /// The currently selected district code, if any.
    #[must_use]
    pub fn selected_district(&self) -> Option<&str> {
        self.selected_district.as_deref()
    }

    /// Districts of the selected province, or empty when none is selected.
    #[must_use]
    pub fn districts(&self) -> &[District] {
        let selected = self
            .selected_province
            .as_deref()
            .and_then(|code| self.provinces.iter().find(|p| p.code == code));

        match selected {
            Some(province) => &province.districts,
            None => &[],
        }
    }

    /// Select a province by code, always resetting the district.
    ///
    /// Returns `false` and clears both selections when the code is
    /// unknown.
    pub fn select_province(&mut self, code: &str) -> bool {
        self.selected_district = None;

        if self.provinces.iter().any(|p| p.code == code) {
            self.selected_province = Some(code.to_owned());
            true
        } else {
            self.selected_province = None;
            false
        }
    }

    /// Select a district by code within the selected province.
    ///
    /// Returns `false` when no province is selected or the code is not
    /// one of its districts.
    pub fn select_district(&mut self, code: &str) -> bool {
        if self.districts().iter().any(|d| d.code == code) {
            self.selected_district = Some(code.to_owned());
            true
        } else {
            self.selected_district = None;
            false
        }
    }
}
