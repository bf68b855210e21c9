//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with absolute expiry.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// == Cache Entry ==
/// A single cache entry: an arbitrary JSON payload plus its lifetime window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Absolute expiry timestamp (`created_at + ttl`)
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    pub fn new(value: Value, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        Self {
            value,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds as i64),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is visible to readers iff `now < expires_at`; at the boundary
    /// it is already expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in whole seconds, clamped to zero once elapsed.
    pub fn ttl_seconds_remaining(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(json!({"count": 3}), 60);
        assert!(!entry.is_expired());
        assert_eq!(entry.expires_at - entry.created_at, Duration::seconds(60));
    }

    #[test]
    fn test_ttl_remaining_fresh() {
        let entry = CacheEntry::new(json!("payload"), 300);
        let remaining = entry.ttl_seconds_remaining();
        assert!(remaining <= 300);
        assert!(remaining >= 299);
    }

    #[test]
    fn test_expired_entry() {
        let now = Utc::now();
        let entry = CacheEntry {
            value: json!(null),
            created_at: now - Duration::seconds(120),
            expires_at: now - Duration::seconds(60),
        };
        assert!(entry.is_expired());
        assert_eq!(entry.ttl_seconds_remaining(), 0);
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let entry = CacheEntry {
            value: json!(null),
            created_at: now,
            expires_at: now,
        };
        assert!(entry.is_expired(), "entry should be expired at the boundary");
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let entry = CacheEntry::new(json!([1, 2, 3]), 10);
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: CacheEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.value, entry.value);
        assert_eq!(parsed.expires_at, entry.expires_at);
    }
}
