//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to development defaults.
//!
//! - `VITRINE_HOST` - Bind address (default: 127.0.0.1)
//! - `VITRINE_PORT` - Listen port (default: 3000)
//! - `VITRINE_DATA_DIR` - Directory for the persisted cart/favorites JSON
//!   store (default: `./data`). The special value `:memory:` selects an
//!   in-memory store that is lost on shutdown.
//! - `CATALOG_API_BASE` - Base URL of the catalog REST API
//!   (default: `https://api.escuelajs.co/api/v1`)
//! - `CATALOG_CACHE_TTL_SECS` - Catalog response cache TTL (default: 300)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Default catalog API used when `CATALOG_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "https://api.escuelajs.co/api/v1";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
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
    /// Directory holding the persisted state store (`:memory:` for the
    /// in-memory store)
    pub data_dir: String,
    /// Catalog API configuration
    pub catalog: CatalogConfig,
}

/// Catalog REST API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL, without a trailing slash (e.g., `https://api.example.com/v1`)
    pub api_base: String,
    /// How long catalog responses stay cached, in seconds
    pub cache_ttl_secs: u64,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("VITRINE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("VITRINE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("VITRINE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("VITRINE_PORT".to_string(), e.to_string()))?;
        let data_dir = get_env_or_default("VITRINE_DATA_DIR", "./data");
        let catalog = CatalogConfig::from_env()?;

        Ok(Self {
            host,
            port,
            data_dir,
            catalog,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_base = get_env_or_default("CATALOG_API_BASE", DEFAULT_API_BASE);
        validate_api_base(&api_base)?;
        let cache_ttl_secs = get_env_or_default("CATALOG_CACHE_TTL_SECS", "300")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_CACHE_TTL_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            cache_ttl_secs,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that the catalog base is an absolute http(s) URL.
fn validate_api_base(value: &str) -> Result<(), ConfigError> {
    let url = url::Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_API_BASE".to_string(), e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            "CATALOG_API_BASE".to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    Ok(())
}
