//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::{DEFAULT_MAX_BYTES, DEFAULT_MAX_ITEMS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of items the cache can hold
    pub max_items: usize,
    /// Maximum total payload size the cache can hold, in bytes
    pub max_bytes: usize,
    /// TTL in seconds applied by the HTTP layer to stored payloads
    pub default_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ITEMS` - Maximum cache items (default: 262144)
    /// - `MAX_BYTES` - Maximum total payload bytes (default: 64 MiB)
    /// - `DEFAULT_TTL` - TTL in seconds for stored payloads (default: 600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            max_items: env::var("MAX_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(DEFAULT_MAX_ITEMS),
            max_bytes: env::var("MAX_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(DEFAULT_MAX_BYTES),
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            max_bytes: DEFAULT_MAX_BYTES,
            default_ttl: 600,
            server_port: 3000,
        }
    }
}
