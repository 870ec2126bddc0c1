//! Cache Entry Module
//!
//! Defines the record stored for each key, including its expiry and its
//! position links in the recency list.

// == Cache Entry ==
/// A single cache entry with value, expiry and recency links.
///
/// Links are arena slot ids owned by the recency list, never references.
#[derive(Debug, Clone)]
pub struct CacheEntry<K, V> {
    /// The key this entry is indexed under
    pub key: K,
    /// The stored value
    pub value: V,
    /// Expiration timestamp (seconds), None = no expiration
    pub expires_at: Option<i64>,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: K, value: V, expires_at: Option<i64>) -> Self {
        Self {
            key,
            value,
            expires_at,
            prev: None,
            next: None,
        }
    }

    // == Is Expired ==
    /// Checks if the entry is stale at `now`.
    ///
    /// An entry is expired only once `now` is strictly past its expiry, so it
    /// is still readable at exactly `expires_at`.
    pub fn is_expired(&self, now: i64) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns remaining lifetime in seconds, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(0)` if the entry has expired
    /// - `Some(remaining)` if the entry is still live
    /// - `None` if the entry never expires
    pub fn ttl_remaining(&self, now: i64) -> Option<i64> {
        self.expires_at
            .map(|expires| expires.saturating_sub(now).max(0))
    }
}
