//! Server configuration module

use clap::Parser;
use precast_app::config::StoreConfig;

use crate::config::{auth::AdminConfig, logging::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod auth;
pub(crate) mod logging;
pub(crate) mod server;

/// Precast JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "precast-json", about = "Precast catalog JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Record store and object storage settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Admin authentication settings.
    #[command(flatten)]
    pub admin: AdminConfig,
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

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
