//! Backend API config

use clap::Args;

/// Backend API settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Base URL of the storefront backend
    #[arg(
        long,
        env = "SHOPFRONT_API_URL",
        default_value = "http://localhost:5000/api"
    )]
    pub base_url: String,
}
