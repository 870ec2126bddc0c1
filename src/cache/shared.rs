//! Shared Cache Handle
//!
//! Thread-safe wrapper that serializes whole cache operations behind one lock.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheStats, LruCache};
use crate::clock::{Clock, SystemClock};

/// Cloneable handle to one [`LruCache`] shared across threads.
///
/// A single mutex covers the index and the recency list together; each
/// method holds it for the full operation. `get` mutates recency order, so
/// there is no read-only fast path.
#[derive(Debug)]
pub struct SharedCache<K, V, C = SystemClock> {
    inner: Arc<Mutex<LruCache<K, V, C>>>,
}

impl<K, V, C> Clone for SharedCache<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V, C> From<LruCache<K, V, C>> for SharedCache<K, V, C> {
    fn from(cache: LruCache<K, V, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}

impl<K, V, C> SharedCache<K, V, C>
where
    K: Hash + Eq + Clone,
    C: Clock,
{
    /// Wraps an existing cache.
    pub fn new(cache: LruCache<K, V, C>) -> Self {
        Self::from(cache)
    }

    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().has(key)
    }

    /// Looks up `key`, promoting it, and returns a copy of the value.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    pub fn set(&self, key: K, value: V) {
        self.inner.lock().set(key, value);
    }

    pub fn delete<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().delete(key);
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().keys()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    // == With Lock ==
    /// Runs `f` with exclusive access, for compound read-modify-write steps
    /// that must not interleave with other callers.
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut LruCache<K, V, C>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
