//! Geographic reference models.

use serde::{Deserialize, Serialize};

/// A province with its districts merged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    /// Province code, unique across the dataset.
    pub code: String,

    /// Province display name.
    pub name: String,

    /// Districts under this province, sorted by name.
    pub districts: Vec<District>,
}

/// A district. Codes are only unique within their parent province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    /// District code.
    pub code: String,

    /// District display name.
    pub name: String,
}

/// One entry of the upstream province dataset (a flat keyed map).
#[derive(Debug, Clone, Deserialize)]
pub struct ProvinceRecord {
    /// Province display name.
    pub name: String,
}

/// One entry of the upstream district dataset (a flat keyed map).
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictRecord {
    /// District display name.
    pub name: String,

    /// Code of the parent province.
    pub parent_code: String,
}
