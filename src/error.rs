//! Error types for the cache
//!
//! Provides construction error handling using thiserror.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while building a cache from invalid parameters.
///
/// Construction is the only fallible step; every cache operation after a
/// successful build is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Capacity was negative
    #[error("Invalid capacity value provided: {0}")]
    InvalidCapacity(i64),

    /// TTL was negative
    #[error("Invalid ttl value provided: {0}")]
    InvalidTtl(i64),
}

// == Result Type Alias ==
/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InvalidCapacity(-10).to_string(),
            "Invalid capacity value provided: -10"
        );
        assert_eq!(
            ConfigError::InvalidTtl(-1).to_string(),
            "Invalid ttl value provided: -1"
        );
    }
}
