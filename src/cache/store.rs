//! Cache Store Module
//!
//! Main cache engine combining the key index with the recency list and lazy
//! TTL expiration.

use std::borrow::Borrow;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, KeyIndex, RecencyList};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::{ConfigError, Result};

// == LRU Cache ==
/// Capacity-bounded cache with LRU eviction and optional TTL expiry.
///
/// Every operation updates the index and the recency list together, so the
/// key set of one is always the key set of the other. Methods take
/// `&mut self` and do no locking; see [`SharedCache`](crate::cache::SharedCache)
/// for use across threads.
#[derive(Debug)]
pub struct LruCache<K, V, C = SystemClock> {
    /// Key to slot lookup
    index: KeyIndex<K>,
    /// Entry storage ordered by recency
    entries: RecencyList<K, V>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries, None = unbounded
    capacity: Option<usize>,
    /// Entry lifetime in seconds, None = never expires
    ttl: Option<i64>,
    clock: C,
}

impl<K, V> LruCache<K, V, SystemClock>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a cache driven by the wall clock.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, 0 = unbounded
    /// * `ttl` - Entry lifetime in seconds since last `set`, 0 = never expires
    ///
    /// # Errors
    /// [`ConfigError`] when either argument is negative.
    pub fn new(capacity: i64, ttl: i64) -> Result<Self> {
        Self::with_clock(capacity, ttl, SystemClock)
    }

    /// Creates a wall-clock cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.capacity, config.ttl)
    }
}

impl<K, V, C> LruCache<K, V, C>
where
    K: Hash + Eq + Clone,
    C: Clock,
{
    /// Creates a cache that reads time from `clock`.
    pub fn with_clock(capacity: i64, ttl: i64, clock: C) -> Result<Self> {
        if capacity < 0 {
            return Err(ConfigError::InvalidCapacity(capacity));
        }
        if ttl < 0 {
            return Err(ConfigError::InvalidTtl(ttl));
        }

        // Capacities beyond the address space clamp rather than read as unbounded
        let capacity = Some(usize::try_from(capacity).unwrap_or(usize::MAX)).filter(|&c| c > 0);
        let ttl = Some(ttl).filter(|&t| t > 0);
        // Bounded caches preallocate, but never more than a sane amount up front
        let reserve = capacity.unwrap_or(0).min(1024);

        Ok(Self {
            index: KeyIndex::with_capacity(reserve),
            entries: RecencyList::with_capacity(reserve),
            stats: CacheStats::new(),
            capacity,
            ttl,
            clock,
        })
    }

    // == Has ==
    /// Checks whether `key` is tracked. Expiry is not considered.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains(key)
    }

    // == Get ==
    /// Retrieves a value by key and marks it most recently used.
    ///
    /// A stale entry is removed and reported as absent. Reading never
    /// extends an entry's lifetime.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(slot) = self.index.get(key) else {
            trace!("cache miss");
            self.stats.record_miss();
            return None;
        };

        if self.ttl.is_some() {
            let now = self.clock.now();
            let expired = self
                .entries
                .get(slot)
                .is_some_and(|entry| entry.is_expired(now));
            if expired {
                self.index.remove(key);
                self.entries.remove(slot);
                self.stats.record_expiration();
                debug!(now, size = self.entries.len(), "expired entry dropped on read");
                return None;
            }
        }

        self.stats.record_hit();
        self.entries.move_to_tail(slot);
        self.entries.get(slot).map(|entry| &entry.value)
    }

    // == Peek ==
    /// Reads a value without touching recency, expiry or statistics.
    ///
    /// A stale entry reads as absent but stays in the cache until a `get`,
    /// `delete` or eviction removes it.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry = self.entries.get(self.index.get(key)?)?;
        if self.ttl.is_some() && entry.is_expired(self.clock.now()) {
            return None;
        }
        Some(&entry.value)
    }

    // == Set ==
    /// Stores a key-value pair and marks it most recently used.
    ///
    /// Overwriting an existing key replaces the value in place and restarts
    /// its TTL. Inserting a new key into a full cache first evicts the least
    /// recently used entry.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        let expires_at = self.ttl.map(|ttl| self.clock.now().saturating_add(ttl));

        if let Some(slot) = self.index.get(&key) {
            if let Some(entry) = self.entries.get_mut(slot) {
                entry.value = value;
                entry.expires_at = expires_at;
            }
            self.entries.move_to_tail(slot);
            trace!(size = self.entries.len(), "cache entry updated");
            return self;
        }

        if self
            .capacity
            .is_some_and(|capacity| self.entries.len() >= capacity)
        {
            self.evict();
        }

        let slot = self
            .entries
            .push_tail(CacheEntry::new(key.clone(), value, expires_at));
        self.index.put(key, slot);
        trace!(size = self.entries.len(), "cache entry inserted");
        self
    }

    // == Delete ==
    /// Removes an entry by key. Missing keys are ignored.
    pub fn delete<Q>(&mut self, key: &Q) -> &mut Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(slot) = self.index.remove(key) {
            self.entries.remove(slot);
        }
        self
    }

    // == Clear ==
    /// Drops every entry. Statistics counters are kept.
    pub fn clear(&mut self) -> &mut Self {
        let dropped = self.entries.len();
        self.index.clear();
        self.entries.clear();
        debug!(dropped, "cache cleared");
        self
    }

    // == Keys ==
    /// Returns every live key from least to most recently used.
    pub fn keys(&self) -> Vec<K> {
        self.entries.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Iterates entries from least to most recently used without promoting them.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|entry| (&entry.key, &entry.value))
    }

    // == Evict ==
    /// Drops the least recently used entry, if any.
    pub(crate) fn evict(&mut self) {
        if let Some(entry) = self.entries.pop_head() {
            self.index.remove(&entry.key);
            self.stats.record_eviction();
            debug!(size = self.entries.len(), "evicted least recently used entry");
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries, 0 = unbounded.
    pub fn capacity(&self) -> usize {
        self.capacity.unwrap_or(0)
    }

    /// Entry lifetime in seconds, 0 = never expires.
    pub fn ttl(&self) -> i64 {
        self.ttl.unwrap_or(0)
    }

    /// Remaining lifetime of `key` in seconds, None if absent or never expiring.
    pub fn ttl_remaining<Q>(&self, key: &Q) -> Option<i64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ttl?;
        let entry = self.entries.get(self.index.get(key)?)?;
        entry.ttl_remaining(self.clock.now())
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(self.index.len(), self.entries.len());
        assert_eq!(self.entries.iter().count(), self.entries.len());
        assert_eq!(self.entries.head().is_none(), self.entries.is_empty());
        assert_eq!(self.entries.tail().is_none(), self.entries.is_empty());
        for entry in self.entries.iter() {
            let slot = self.index.get(&entry.key);
            assert!(slot.is_some(), "listed key missing from index");
        }
        if let Some(capacity) = self.capacity {
            assert!(self.entries.len() <= capacity);
        }
    }
}
