//! Catalog models.

use serde::{Deserialize, Serialize};

/// A product as listed in browsing views.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Backend product identifier.
    pub product_id: i64,

    /// Product display name.
    pub name: String,

    /// Unit price in whole đồng.
    pub price: u64,

    /// Owning category, when assigned.
    #[serde(default)]
    pub category_id: Option<i64>,

    /// Thumbnail image URL, when present.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend category identifier.
    pub category_id: i64,

    /// Category display name.
    pub name: String,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,

    /// One-based page number.
    pub page: u32,

    /// Requested page size.
    pub page_size: u32,

    /// Total number of matching items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// An empty page mirroring the query's pagination.
    #[must_use]
    pub fn empty(page: u32, page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page,
            page_size,
            total: 0,
        }
    }
}

/// Filter and pagination parameters for product listings, serialized as
/// URL query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Free-text search term.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Restrict to one category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,

    /// One-based page number.
    pub page: u32,

    /// Page size.
    pub page_size: u32,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search: None,
            category_id: None,
            page: 1,
            page_size: 20,
        }
    }
}
