//! Upstream reference data source for provinces and districts.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::geo::models::{DistrictRecord, ProvinceRecord};

/// Errors raised while fetching the reference datasets.
#[derive(Debug, Error)]
pub enum GeoSourceError {
    /// Transport failure or non-success status.
    #[error("reference data fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A dataset body could not be parsed.
    #[error("reference data parse failed")]
    Decode(#[from] serde_json::Error),
}

/// The two read-only reference datasets, each a flat map keyed by code.
#[automock]
#[async_trait]
pub trait GeoSource: Send + Sync {
    /// Fetch the province dataset.
    async fn fetch_provinces(&self) -> Result<FxHashMap<String, ProvinceRecord>, GeoSourceError>;

    /// Fetch the district dataset.
    async fn fetch_districts(&self) -> Result<FxHashMap<String, DistrictRecord>, GeoSourceError>;
}

/// Fetches the datasets from two fixed public URLs.
#[derive(Debug, Clone)]
pub struct HttpGeoSource {
    provinces_url: String,
    districts_url: String,
    http: reqwest::Client,
}

impl HttpGeoSource {
    /// Create a source for the given dataset URLs.
    #[must_use]
    pub fn new(provinces_url: impl Into<String>, districts_url: impl Into<String>) -> Self {
        Self {
            provinces_url: provinces_url.into(),
            districts_url: districts_url.into(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GeoSource for HttpGeoSource {
    async fn fetch_provinces(&self) -> Result<FxHashMap<String, ProvinceRecord>, GeoSourceError> {
        let response = self.http.get(&self.provinces_url).send().await?;
        let body = response.error_for_status()?.text().await?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_districts(&self) -> Result<FxHashMap<String, DistrictRecord>, GeoSourceError> {
        let response = self.http.get(&self.districts_url).send().await?;
        let body = response.error_for_status()?.text().await?;

        Ok(serde_json::from_str(&body)?)
    }
}
