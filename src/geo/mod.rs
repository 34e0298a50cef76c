//! Geographic reference data: cached province/district lookup.

pub mod cache;
mod collation;
pub mod models;
pub mod picker;
pub mod source;

pub use cache::{GEO_CACHE_VERSION, GeoCache, GeoCacheError};
pub use models::{District, Province};
pub use picker::ProvincePicker;
pub use source::{GeoSource, GeoSourceError, HttpGeoSource};
