//! Session persistence config

use std::path::PathBuf;

use clap::Args;

/// Session persistence settings.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Path of the persisted session file
    #[arg(
        long,
        env = "SHOPFRONT_SESSION",
        default_value = ".shopfront/session.json"
    )]
    pub session_path: PathBuf,
}
