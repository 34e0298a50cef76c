//! Geographic reference data config

use std::path::PathBuf;

use clap::Args;

/// Reference dataset locations and the local cache path.
#[derive(Debug, Args)]
pub struct GeoConfig {
    /// URL of the province dataset
    #[arg(
        long,
        env = "SHOPFRONT_PROVINCES_URL",
        default_value = "https://cdn.jsdelivr.net/gh/daohoangson/dvhcvn@latest/data/provinces.json"
    )]
    pub provinces_url: String,

    /// URL of the district dataset
    #[arg(
        long,
        env = "SHOPFRONT_DISTRICTS_URL",
        default_value = "https://cdn.jsdelivr.net/gh/daohoangson/dvhcvn@latest/data/districts.json"
    )]
    pub districts_url: String,

    /// Path of the local geo cache file
    #[arg(
        long,
        env = "SHOPFRONT_GEO_CACHE",
        default_value = ".shopfront/geo-cache.json"
    )]
    pub cache_path: PathBuf,
}
