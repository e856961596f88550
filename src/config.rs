//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_TTL_MS;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Default TTL in milliseconds for entries stored without an explicit TTL
    pub default_ttl_ms: i64,
    /// Maximum number of slots the cache can hold; `None` means unbounded
    pub max_slots: Option<usize>,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 1000)
    /// - `MAX_SLOTS` - Maximum slot count (default: unset, unbounded)
    pub fn from_env() -> Self {
        Self {
            default_ttl_ms: env::var("DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_MS),
            max_slots: env::var("MAX_SLOTS").ok().and_then(|v| v.parse().ok()),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: DEFAULT_TTL_MS,
            max_slots: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.default_ttl_ms, 1000);
        assert_eq!(config.max_slots, None);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("DEFAULT_TTL_MS");
        env::remove_var("MAX_SLOTS");

        let config = CacheConfig::from_env();
        assert_eq!(config.default_ttl_ms, 1000);
        assert_eq!(config.max_slots, None);
    }

    #[test]
    fn test_config_deserialize() {
        let config: CacheConfig =
            serde_json::from_str(r#"{"default_ttl_ms":2000,"max_slots":5}"#).unwrap();
        assert_eq!(config.default_ttl_ms, 2000);
        assert_eq!(config.max_slots, Some(5));
    }
}
