//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::listing::LISTING_TTL_SECS;

/// Default TTL for whole-response caching of the listing endpoint (15 minutes).
pub const DEFAULT_RESPONSE_TTL: u64 = 60 * 15;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for the cached property listing
    pub listing_ttl: u64,
    /// TTL in seconds for cached listing responses
    pub response_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Serialize concurrent cache refreshes behind a single in-flight query
    pub single_flight: bool,
    /// JSON file used to seed the backing property store
    pub properties_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `LISTING_TTL` - Listing cache TTL in seconds (default: 3600)
    /// - `RESPONSE_TTL` - Response cache TTL in seconds (default: 900)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `SINGLE_FLIGHT` - Deduplicate concurrent misses (default: false)
    /// - `PROPERTIES_FILE` - Seed file for the property store (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            listing_ttl: parse_var("LISTING_TTL").unwrap_or(defaults.listing_ttl),
            response_ttl: parse_var("RESPONSE_TTL").unwrap_or(defaults.response_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            single_flight: parse_var("SINGLE_FLIGHT").unwrap_or(defaults.single_flight),
            properties_file: env::var("PROPERTIES_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            listing_ttl: LISTING_TTL_SECS,
            response_ttl: DEFAULT_RESPONSE_TTL,
            cleanup_interval: 60,
            single_flight: false,
            properties_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.listing_ttl, 3600);
        assert_eq!(config.response_ttl, 900);
        assert_eq!(config.cleanup_interval, 60);
        assert!(!config.single_flight);
        assert!(config.properties_file.is_none());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("LISTING_TTL");
        env::remove_var("RESPONSE_TTL");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("SINGLE_FLIGHT");
        env::remove_var("PROPERTIES_FILE");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.listing_ttl, 3600);
        assert_eq!(config.response_ttl, 900);
        assert_eq!(config.cleanup_interval, 60);
        assert!(!config.single_flight);
        assert!(config.properties_file.is_none());
    }
}
