//! Cache Module
//!
//! In-memory LRU cache with lazy TTL expiration.
//!
//! # Layout
//! - [`KeyIndex`]: key to slot lookup (O(1))
//! - [`RecencyList`]: arena-backed doubly linked recency order (O(1))
//! - [`LruCache`]: keeps both in step and applies the TTL policy
//! - [`SharedCache`]: whole-operation locking for multi-threaded callers

mod entry;
mod index;
mod lru;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use index::KeyIndex;
pub use lru::{Iter, RecencyList};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::LruCache;
