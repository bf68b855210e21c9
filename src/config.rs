//! Configuration Module
//!
//! Handles loading server and client configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::DEFAULT_TTL_SECS;

/// Placeholder token that ships in the default endpoint URL. The request
/// client refuses to issue any network I/O while this token is present.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_DEPLOYMENT_ID";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Path to the row store data file
    pub data_path: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DATA_PATH` - Row store data file (default: students.json)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            data_path: env::var("DATA_PATH")
                .ok()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("students.json")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            data_path: PathBuf::from("students.json"),
        }
    }
}

/// Client configuration parameters.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint URL for the registry API
    pub endpoint_url: String,
    /// Wall-clock timeout per request in seconds
    pub request_timeout_secs: u64,
    /// Retry budget for transient failures
    pub request_retries: u32,
    /// Whether the local cache is active
    pub cache_enabled: bool,
    /// Path of the single-slot cache blob
    pub cache_path: PathBuf,
    /// TTL in seconds for cached list and record queries
    pub cache_ttl_secs: u64,
}

impl ClientConfig {
    /// Creates a new ClientConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ENDPOINT_URL` - Registry endpoint (default contains the placeholder)
    /// - `REQUEST_TIMEOUT` - Per-request timeout in seconds (default: 30)
    /// - `REQUEST_RETRIES` - Retry budget (default: 3)
    /// - `CACHE_ENABLED` - Local cache toggle (default: true)
    /// - `CACHE_PATH` - Cache blob path (default: registry_cache.json)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 300)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint_url: env::var("ENDPOINT_URL").unwrap_or(defaults.endpoint_url),
            request_timeout_secs: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            request_retries: env::var("REQUEST_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_retries),
            cache_enabled: env::var("CACHE_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_enabled),
            cache_path: env::var("CACHE_PATH")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_path),
            cache_ttl_secs: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl_secs),
        }
    }

    /// Whether the endpoint URL has been substituted with a real deployment.
    pub fn is_configured(&self) -> bool {
        !self.endpoint_url.contains(ENDPOINT_PLACEHOLDER)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: format!(
                "https://registry.example.com/api/{}/exec",
                ENDPOINT_PLACEHOLDER
            ),
            request_timeout_secs: 30,
            request_retries: 3,
            cache_enabled: true,
            cache_path: PathBuf::from("registry_cache.json"),
            cache_ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}
