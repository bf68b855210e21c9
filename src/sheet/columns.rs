//! Column Mapping Module
//!
//! The row store keeps a fixed header row. Lookups in both directions
//! (name -> index, index -> name) go through a bidirectional map built once
//! at startup, so per-field updates never scan the header.

use std::collections::HashMap;

/// Header row for the student sheet, in persisted column order.
pub const STUDENT_COLUMNS: [&str; 10] = [
    "id",
    "name",
    "fatherName",
    "email",
    "phone",
    "course",
    "semester",
    "rollNo",
    "createdAt",
    "updatedAt",
];

// == Column Map ==
/// Bidirectional mapping between column names and row indices.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    names: Vec<String>,
    indices: HashMap<String, usize>,
}

impl ColumnMap {
    /// Builds the map for an arbitrary header row.
    pub fn new(header: &[&str]) -> Self {
        let names: Vec<String> = header.iter().map(|name| name.to_string()).collect();
        let indices = names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect();
        Self { names, indices }
    }

    /// Builds the map for the student schema.
    pub fn student() -> Self {
        Self::new(&STUDENT_COLUMNS)
    }

    /// Index of a column by name.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Name of a column by index.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// The header row.
    pub fn header(&self) -> &[String] {
        &self.names
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the header is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
