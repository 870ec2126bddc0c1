//! Configuration Module
//!
//! Capacity and TTL settings, with loading from environment variables for the
//! demo binary. The library itself never reads the environment.

use std::env;

use serde::Serialize;

/// Cache configuration parameters.
///
/// Values are kept signed so invalid input survives until the cache
/// constructor rejects it with a [`ConfigError`](crate::error::ConfigError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheConfig {
    /// Maximum number of entries, 0 = unbounded
    pub capacity: i64,
    /// Entry lifetime in seconds since last write, 0 = never expires
    pub ttl: i64,
}

impl CacheConfig {
    /// Creates a configuration from explicit values.
    pub fn new(capacity: i64, ttl: i64) -> Self {
        Self { capacity, ttl }
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `LRU_TTL` - TTL in seconds (default: 0, never expire)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env::var("LRU_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.capacity),
            ttl: env::var("LRU_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            ttl: 0,
        }
    }
}
