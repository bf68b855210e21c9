//! Cache Statistics Module
//!
//! Read-only snapshot of cache contents: entry count, serialized size, and
//! per-key lifetime information. Taking a snapshot never mutates the store.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Entry Stats ==
/// Lifetime information for one cached key.
#[derive(Debug, Clone, Serialize)]
pub struct EntryStats {
    /// When the entry was written
    pub created_at: DateTime<Utc>,
    /// When the entry stops being visible
    pub expires_at: DateTime<Utc>,
    /// Seconds until expiry, clamped to zero
    pub ttl_seconds_remaining: i64,
}

// == Cache Stats ==
/// Snapshot of the whole store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of entries currently held
    pub total: usize,
    /// Byte size of the serialized blob as it would be persisted
    pub size_bytes: usize,
    /// Per-key lifetime details
    pub entries: HashMap<String, EntryStats>,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.size_bytes, 0);
        assert!(stats.entries.is_empty());
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::default();
        let now = Utc::now();
        stats.total = 1;
        stats.size_bytes = 42;
        stats.entries.insert(
            "students_list".to_string(),
            EntryStats {
                created_at: now,
                expires_at: now,
                ttl_seconds_remaining: 0,
            },
        );
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("students_list"));
        assert!(json.contains("ttl_seconds_remaining"));
    }
}
