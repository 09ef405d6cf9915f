//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//!
//! None - every setting has a development default so the demo runs out of
//! the box.
//!
//! ## Optional
//! - `FORKFUL_HOST` - Bind address (default: 127.0.0.1)
//! - `FORKFUL_PORT` - Listen port (default: 3000)
//! - `FORKFUL_BASE_URL` - Public URL for the storefront (default: <http://localhost:3000>)
//! - `FORKFUL_DATA_DIR` - Directory for the listing snapshot file (default: ./data)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag (e.g., production)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory holding locally persisted data (the listing snapshot file)
    pub data_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("FORKFUL_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("FORKFUL_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("FORKFUL_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("FORKFUL_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("FORKFUL_BASE_URL", "http://localhost:3000");
        let data_dir = PathBuf::from(get_env_or_default("FORKFUL_DATA_DIR", "data"));
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Path of the JSON snapshot file holding the food listings.
    #[must_use]
    pub fn listings_path(&self) -> PathBuf {
        self.data_dir.join("listings.json")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
