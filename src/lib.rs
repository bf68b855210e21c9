//! Student Registry - a spreadsheet-style student roster behind a JSON endpoint
//!
//! The server side keeps student records in a tabular row store and answers
//! every operation through one action-multiplexed POST endpoint. The client
//! side wraps that endpoint with a retrying HTTP client and a TTL cache.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod sheet;

pub use api::AppState;
pub use config::{ClientConfig, Config};
pub use error::{RegistryError, Result};
