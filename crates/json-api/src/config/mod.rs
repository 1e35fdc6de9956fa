//! Server configuration module

use clap::Parser;

use crate::config::{http::HttpConfig, observability::LoggingConfig};

pub(crate) mod http;
pub(crate) mod observability;

/// Rebate JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "rebate-json", about = "Rebate JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Listener, CORS and shutdown settings.
    #[command(flatten)]
    pub http: HttpConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl ServerConfig {
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
