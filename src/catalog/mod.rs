//! Catalog browsing: products, categories, debounced search.

pub mod models;
pub mod view;

pub use models::{Category, Page, ProductQuery, ProductSummary};
pub use view::{CatalogView, SearchBox};
