//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the store's visibility, deletion, and eviction
//! behavior over generated key/value sequences.

use chrono::{Duration, Utc};
use proptest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use crate::cache::{CacheEntry, CacheStore};

// == Strategies ==
/// Generates valid cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,32}"
}

/// Generates string payloads
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}"
}

fn open_store(dir: &TempDir) -> CacheStore {
    CacheStore::open(dir.path().join("cache.json"), true)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // For any key, set followed by get within the TTL returns the stored value.
    #[test]
    fn prop_set_get_round_trip(key in key_strategy(), value in value_strategy()) {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.set(&key, &value, 300);
        let retrieved: Option<String> = store.get(&key);
        prop_assert_eq!(retrieved, Some(value));
    }

    // For any key, remove then get returns absent regardless of prior TTL.
    #[test]
    fn prop_remove_makes_absent(key in key_strategy(), value in value_strategy(), ttl in 1u64..3600) {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.set(&key, &value, ttl);
        store.remove(&key);
        prop_assert_eq!(store.get::<String>(&key), None);
    }

    // Overwriting a key leaves a single entry holding the newest value.
    #[test]
    fn prop_overwrite_keeps_newest(
        key in key_strategy(),
        first in value_strategy(),
        second in value_strategy()
    ) {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.set(&key, &first, 300);
        store.set(&key, &second, 300);
        prop_assert_eq!(store.get::<String>(&key), Some(second));
        prop_assert_eq!(store.len(), 1);
    }

    // Clearing empties the store no matter what was written.
    #[test]
    fn prop_clear_empties(entries in prop::collection::vec((key_strategy(), value_strategy()), 1..20)) {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        for (key, value) in entries {
            store.set(&key, &value, 300);
        }
        store.clear();
        prop_assert_eq!(store.stats().total, 0);
    }

    // When the blob overflows, exactly the oldest ceil(n/2) entries (by
    // created_at) are evicted and the newest floor(n/2) survive.
    #[test]
    fn prop_eviction_keeps_newest_half(n in 2usize..20) {
        let dir = TempDir::new().unwrap();
        // Ceiling sized so one eviction pass is enough to fit the blob
        let per_entry = 120; // rough serialized footprint of one entry
        let mut store = CacheStore::with_capacity(
            dir.path().join("cache.json"),
            true,
            per_entry * n - per_entry / 2,
        );

        let base = Utc::now();
        for i in 0..n {
            let entry = CacheEntry {
                value: json!(format!("{:032}", i)),
                created_at: base + Duration::seconds(i as i64),
                expires_at: base + Duration::seconds(i as i64 + 3600),
            };
            store.insert_for_test(format!("key{:02}", i), entry);
        }
        store.persist_for_test();

        let survivors = store.len();
        prop_assert!(survivors <= n - n.div_ceil(2),
            "expected at most {} survivors, found {}", n - n.div_ceil(2), survivors);

        // Whatever survived must be a suffix of the insertion order
        let oldest_surviving = n - survivors;
        for i in 0..n {
            let present = store.get::<String>(&format!("key{:02}", i)).is_some();
            if i < oldest_surviving {
                prop_assert!(!present, "key{:02} should have been evicted", i);
            } else {
                prop_assert!(present, "key{:02} should have survived", i);
            }
        }
    }

    // Pattern invalidation removes exactly the matching keys.
    #[test]
    fn prop_invalidate_pattern_exact(ids in prop::collection::hash_set("[A-Z]{2}[0-9]{3}", 1..10)) {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        for id in &ids {
            store.set(&format!("student_{}", id), &json!(id), 300);
        }
        store.set("students_list", &json!([]), 300);

        let removed = store.invalidate_pattern("^student_");
        prop_assert_eq!(removed, ids.len());
        prop_assert_eq!(store.len(), 1);
        prop_assert!(store.get::<serde_json::Value>("students_list").is_some());
    }
}
