//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a simple reference model and the
//! structural invariants shared by the index and the recency list.

use proptest::prelude::*;

use crate::cache::LruCache;
use crate::clock::ManualClock;

// == Test Configuration ==
const TEST_CAPACITY: i64 = 8;

// == Strategies ==
/// Small key space so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-l]".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32 },
    Get { key: String },
    Delete { key: String },
    Advance { secs: i64 },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        2 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
        2 => (0i64..4).prop_map(|secs| CacheOp::Advance { secs }),
        1 => Just(CacheOp::Clear),
    ]
}

// == Reference Model ==
/// Vec ordered least to most recently used, holding (key, value, expires_at).
#[derive(Debug, Default)]
struct Model {
    entries: Vec<(String, u32, Option<i64>)>,
    capacity: usize,
    ttl: i64,
}

impl Model {
    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _, _)| k == key)
    }

    fn set(&mut self, key: String, value: u32, now: i64) {
        let expires_at = (self.ttl > 0).then_some(now + self.ttl);
        if let Some(pos) = self.position(&key) {
            self.entries.remove(pos);
        } else if self.capacity > 0 && self.entries.len() >= self.capacity {
            self.entries.remove(0);
        }
        self.entries.push((key, value, expires_at));
    }

    fn get(&mut self, key: &str, now: i64) -> Option<u32> {
        let pos = self.position(key)?;
        if self.entries[pos].2.is_some_and(|expires| now > expires) {
            self.entries.remove(pos);
            return None;
        }
        let entry = self.entries.remove(pos);
        let value = entry.1;
        self.entries.push(entry);
        Some(value)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _, _)| k.clone()).collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any operation sequence leaves the cache agreeing with the model on
    // returned values and on full recency order.
    #[test]
    fn prop_matches_reference_model(
        capacity in 0i64..=TEST_CAPACITY,
        ttl in 0i64..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let clock = ManualClock::new(0);
        let mut now = 0;
        let mut cache: LruCache<String, u32, ManualClock> =
            LruCache::with_clock(capacity, ttl, clock.clone()).unwrap();
        let mut model = Model { capacity: capacity as usize, ttl, ..Model::default() };

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    cache.set(key.clone(), value);
                    model.set(key, value, now);
                }
                CacheOp::Get { key } => {
                    let got = cache.get(&key).copied();
                    prop_assert_eq!(got, model.get(&key, now), "get({}) diverged", key);
                }
                CacheOp::Delete { key } => {
                    cache.delete(&key);
                    if let Some(pos) = model.position(&key) {
                        model.entries.remove(pos);
                    }
                }
                CacheOp::Advance { secs } => {
                    now += secs;
                    clock.advance(secs);
                }
                CacheOp::Clear => {
                    cache.clear();
                    model.entries.clear();
                }
            }

            cache.check_invariants();
            prop_assert_eq!(cache.keys(), model.keys());
            prop_assert_eq!(cache.len(), model.entries.len());
        }
    }

    // Round-trip: a set followed by a get returns the value while TTL holds.
    #[test]
    fn prop_roundtrip(key in key_strategy(), value in any::<u32>(), ttl in 0i64..10) {
        let clock = ManualClock::new(100);
        let mut cache = LruCache::with_clock(TEST_CAPACITY, ttl, clock).unwrap();

        cache.set(key.clone(), value);
        prop_assert_eq!(cache.get(&key), Some(&value));
    }

    // Promotion: after a hit or a set the key is last in recency order.
    #[test]
    fn prop_access_moves_key_last(
        keys in prop::collection::vec(key_strategy(), 1..20),
        pick in any::<prop::sample::Index>(),
        via_get in any::<bool>()
    ) {
        let clock = ManualClock::new(0);
        let mut cache = LruCache::with_clock(0, 0, clock).unwrap();
        for key in &keys {
            cache.set(key.clone(), 0u8);
        }

        let chosen = pick.get(&keys).clone();
        if via_get {
            prop_assert!(cache.get(&chosen).is_some());
        } else {
            cache.set(chosen.clone(), 1);
        }
        let order = cache.keys();
        prop_assert_eq!(order.last(), Some(&chosen));
    }

    // Eviction: N+1 distinct inserts into capacity N drop exactly the first.
    #[test]
    fn prop_eviction_drops_oldest(n in 1usize..20) {
        let clock = ManualClock::new(0);
        let mut cache = LruCache::with_clock(n as i64, 0, clock).unwrap();

        for i in 0..=n {
            cache.set(format!("k{}", i), i);
        }

        prop_assert!(!cache.has("k0"));
        prop_assert_eq!(cache.len(), n);
        prop_assert_eq!(cache.stats().evictions, 1);
        for i in 1..=n {
            let key = format!("k{}", i);
            prop_assert!(cache.has(&key));
        }
    }

    // Statistics: hits and misses count every get exactly once.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let clock = ManualClock::new(0);
        let mut cache = LruCache::with_clock(TEST_CAPACITY, 3, clock.clone()).unwrap();
        let mut gets = 0u64;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => { cache.set(key, value); }
                CacheOp::Get { key } => { cache.get(&key); gets += 1; }
                CacheOp::Delete { key } => { cache.delete(&key); }
                CacheOp::Advance { secs } => clock.advance(secs),
                CacheOp::Clear => { cache.clear(); }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits + stats.misses, gets);
        prop_assert!(stats.expirations <= stats.misses);
        prop_assert_eq!(stats.total_entries, cache.len());
    }
}
