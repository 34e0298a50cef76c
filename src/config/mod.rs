//! Client configuration module

use clap::Parser;

use crate::config::{
    api::ApiConfig, geo::GeoConfig, logging::LoggingConfig, session::SessionConfig,
};

pub(crate) mod api;
pub(crate) mod geo;
pub(crate) mod logging;
pub(crate) mod session;

pub use logging::LogFormat;

/// Shopfront client configuration
#[derive(Debug, Parser)]
#[command(name = "shopfront", about = "Storefront client", long_about = None)]
pub struct ClientConfig {
    /// Backend API settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Geographic reference data settings.
    #[command(flatten)]
    pub geo: GeoConfig,

    /// Session persistence settings.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
