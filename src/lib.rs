//! LRU TTL Cache - an embeddable in-process key/value cache
//!
//! Evicts the least recently used entry when full and optionally expires
//! entries a fixed number of seconds after their last write. Expiry is lazy:
//! stale entries are dropped when read, never by a background sweep.
//!
//! ```
//! use lru_ttl_cache::{LruCache, ManualClock};
//!
//! let clock = ManualClock::new(0);
//! let mut cache = LruCache::with_clock(3, 5, clock.clone()).unwrap();
//!
//! cache.set("a", 1).set("b", 2).set("c", 3).set("d", 4);
//! assert!(!cache.has("a"));
//! assert_eq!(cache.keys(), vec!["b", "c", "d"]);
//!
//! clock.advance(10);
//! assert_eq!(cache.get("b"), None);
//! ```

#![forbid(unsafe_code)]

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;

pub use cache::{CacheStats, LruCache, SharedCache};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{ConfigError, Result};
