//! Sheet Module
//!
//! The tabular row store behind the registry endpoint: a fixed header row,
//! rows of strings, and a bidirectional column map built once at startup.

mod columns;
mod store;

// Re-export public types
pub use columns::{ColumnMap, STUDENT_COLUMNS};
pub use store::SheetStore;
