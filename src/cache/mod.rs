//! Cache Module
//!
//! Single-slot persistent cache with per-entry TTL expiry and size-bounded
//! eviction, layered in front of the remote registry calls.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheStats, EntryStats};
pub use store::CacheStore;

// == Public Constants ==
/// Byte ceiling for the persisted blob (5 MiB)
pub const MAX_BLOB_BYTES: usize = 5 * 1024 * 1024;

/// Default TTL in seconds for cached list and record queries (5 minutes)
pub const DEFAULT_TTL_SECS: u64 = 300;
