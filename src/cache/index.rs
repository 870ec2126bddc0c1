//! Key Index Module
//!
//! Maps keys to the arena slot holding their entry.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Hash map from key to recency list slot. Carries no ordering.
#[derive(Debug)]
pub struct KeyIndex<K> {
    slots: HashMap<K, usize>,
}

impl<K: Hash + Eq> KeyIndex<K> {
    // == Constructor ==
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Creates an empty index with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
        }
    }

    // == Get ==
    /// Returns the slot holding `key`, if tracked.
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(key).copied()
    }

    // == Put ==
    /// Points `key` at `slot`, returning the slot it replaced.
    pub fn put(&mut self, key: K, slot: usize) -> Option<usize> {
        self.slots.insert(key, slot)
    }

    // == Remove ==
    /// Forgets `key`, returning the slot it pointed at.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.remove(key)
    }

    // == Contains ==
    /// Checks if `key` is tracked.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    // == Is Empty ==
    /// Returns true if no key is tracked.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // == Clear ==
    /// Forgets every key.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<K: Hash + Eq> Default for KeyIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_put_get_remove() {
        let mut index: KeyIndex<String> = KeyIndex::new();
        assert!(index.is_empty());

        assert_eq!(index.put("a".to_string(), 0), None);
        assert_eq!(index.put("b".to_string(), 1), None);
        assert_eq!(index.put("a".to_string(), 2), Some(0));

        assert_eq!(index.get("a"), Some(2));
        assert!(index.contains("b"));
        assert_eq!(index.len(), 2);

        assert_eq!(index.remove("b"), Some(1));
        assert_eq!(index.remove("b"), None);
        assert!(!index.contains("b"));

        index.clear();
        assert_eq!(index.len(), 0);
        assert!(index.is_empty());
    }
}
