//! Client Module
//!
//! Everything the browser-facing side of the registry uses to talk to the
//! endpoint: the retrying HTTP client, the record-operations layer with its
//! read cache, and list utilities.

pub mod http;
pub mod records;

pub use http::RequestClient;
pub use records::{
    record_cache_key, search_students, sort_students, Registry, SortField, LIST_CACHE_KEY,
};
