//! Cache Store Module
//!
//! Key-value cache with per-entry expiry, persisted as one JSON blob in a
//! single file slot. Every mutation re-serializes the whole mapping and
//! overwrites the slot; hydration happens once at construction.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheStats, EntryStats, MAX_BLOB_BYTES};

// == Cache Store ==
/// Single-slot persistent cache with TTL expiry and size-bounded eviction.
#[derive(Debug)]
pub struct CacheStore {
    /// File holding the serialized blob
    slot_path: PathBuf,
    /// When false, reads always miss and writes are dropped
    enabled: bool,
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Byte ceiling for the persisted blob
    max_blob_bytes: usize,
}

impl CacheStore {
    // == Constructors ==
    /// Opens the cache, hydrating from the slot file if present.
    ///
    /// A missing or corrupt blob starts the store empty rather than failing.
    pub fn open(slot_path: PathBuf, enabled: bool) -> Self {
        Self::with_capacity(slot_path, enabled, MAX_BLOB_BYTES)
    }

    /// Opens the cache with an explicit blob ceiling.
    pub fn with_capacity(slot_path: PathBuf, enabled: bool, max_blob_bytes: usize) -> Self {
        let entries = match fs::read_to_string(&slot_path) {
            Ok(blob) => match serde_json::from_str(&blob) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "corrupt cache blob, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        if let Some(parent) = slot_path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    warn!(error = %e, "could not create cache directory");
                }
            }
        }
        Self {
            slot_path,
            enabled,
            entries,
            max_blob_bytes,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` when the store is disabled, the key is absent, the
    /// entry has expired (it is purged and the slot persisted), or the stored
    /// payload does not deserialize into `T`. A fresh hit never mutates the
    /// entry's expiry.
    pub fn get<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        if !self.enabled {
            return None;
        }
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.persist();
                debug!(key, "cache entry expired");
                None
            }
            Some(entry) => match serde_json::from_value(entry.value.clone()) {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!(key, error = %e, "cached payload did not deserialize");
                    None
                }
            },
            None => None,
        }
    }

    // == Set ==
    /// Stores a value under `key`, expiring `ttl_seconds` from now, then
    /// persists the whole store. No-op when disabled.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T, ttl_seconds: u64) {
        if !self.enabled {
            return;
        }
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "value not serializable, skipping cache write");
                return;
            }
        };
        self.entries
            .insert(key.to_string(), CacheEntry::new(value, ttl_seconds));
        self.persist();
    }

    // == Remove ==
    /// Deletes an entry unconditionally and persists.
    ///
    /// Deletion is idempotent and allowed even when the store is disabled.
    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.persist();
    }

    // == Clear ==
    /// Empties the entire mapping and persists.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    // == Invalidate Pattern ==
    /// Deletes every key matching the regular expression, persisting once
    /// after all deletions. Returns the number of keys removed. An invalid
    /// pattern removes nothing.
    pub fn invalidate_pattern(&mut self, pattern: &str) -> usize {
        let matcher = match Regex::new(pattern) {
            Ok(matcher) => matcher,
            Err(e) => {
                warn!(pattern, error = %e, "invalid invalidation pattern");
                return 0;
            }
        };
        let matched: Vec<String> = self
            .entries
            .keys()
            .filter(|key| matcher.is_match(key))
            .cloned()
            .collect();
        for key in &matched {
            self.entries.remove(key);
        }
        if !matched.is_empty() {
            self.persist();
        }
        matched.len()
    }

    // == Stats ==
    /// Returns a read-only snapshot of the store contents.
    pub fn stats(&self) -> CacheStats {
        let size_bytes = serde_json::to_string(&self.entries)
            .map(|blob| blob.len())
            .unwrap_or(0);
        let entries = self
            .entries
            .iter()
            .map(|(key, entry)| {
                (
                    key.clone(),
                    EntryStats {
                        created_at: entry.created_at,
                        expires_at: entry.expires_at,
                        ttl_seconds_remaining: entry.ttl_seconds_remaining(),
                    },
                )
            })
            .collect();
        CacheStats {
            total: self.entries.len(),
            size_bytes,
            entries,
        }
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Persistence ==
    /// Serializes the full mapping and overwrites the slot file.
    ///
    /// If the blob exceeds the ceiling, the oldest half of entries (by
    /// `created_at`, rounded up) is evicted before writing. A failed write is
    /// fail-safe, not fail-fatal: all entries are dropped and the slot is
    /// rewritten empty.
    fn persist(&mut self) {
        let mut blob = self.serialize_blob();
        while blob.len() > self.max_blob_bytes && !self.entries.is_empty() {
            let evicted = self.evict_oldest_half();
            warn!(evicted, "cache blob over size ceiling, evicted oldest entries");
            blob = self.serialize_blob();
        }
        if let Err(e) = fs::write(&self.slot_path, blob.as_bytes()) {
            warn!(error = %e, "cache persist failed, dropping all entries");
            self.entries.clear();
            if let Err(e) = fs::write(&self.slot_path, b"{}") {
                warn!(error = %e, "could not reset cache slot, continuing in memory");
            }
        }
    }

    fn serialize_blob(&self) -> String {
        // HashMap<String, CacheEntry> serialization cannot fail
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "{}".to_string())
    }

    /// Removes the oldest ⌈n/2⌉ entries by creation time.
    fn evict_oldest_half(&mut self) -> usize {
        let mut by_age: Vec<(String, DateTime<Utc>)> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.created_at))
            .collect();
        by_age.sort_by_key(|(_, created_at)| *created_at);

        let evict_count = by_age.len().div_ceil(2);
        for (key, _) in by_age.into_iter().take(evict_count) {
            self.entries.remove(&key);
        }
        evict_count
    }
}

// == Test Support ==
#[cfg(test)]
impl CacheStore {
    /// Inserts a pre-built entry, bypassing the enabled check and persist.
    pub(crate) fn insert_for_test(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    /// Runs the persistence step (including eviction) directly.
    pub(crate) fn persist_for_test(&mut self) {
        self.persist();
    }
}
