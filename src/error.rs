//! Error types for the student registry
//!
//! Provides the unified error taxonomy using thiserror. Display strings are
//! human-readable and surfaced to callers verbatim, so the exact wording of
//! the NotFound and DuplicateRollNo messages is part of the API contract.

use thiserror::Error;

/// Maximum length for response bodies embedded in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

// == Registry Error Enum ==
/// Unified error type for the registry client, server, and stores.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The endpoint URL still contains the unsubstituted placeholder token
    #[error("API endpoint is not configured")]
    NotConfigured,

    /// The request exceeded its wall-clock budget and was aborted
    #[error("Request timeout")]
    NetworkTimeout,

    /// Transport failure or non-2xx response
    #[error("Network error: {0}")]
    Network(String),

    /// No student row matches the requested id
    #[error("Student not found")]
    NotFound,

    /// Another student already holds this roll number
    #[error("Student with this roll number already exists")]
    DuplicateRollNo,

    /// Malformed input, reported per field
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Row store or cache persistence fault
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RegistryError {
    /// Builds a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds a network error from a non-2xx status and its body.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        RegistryError::Network(format!("Status {}: {}", status, Self::truncate_body(body)))
    }

    /// Whether the failure is transient and worth retrying.
    ///
    /// Validation, not-found, and duplicate conditions are deterministic and
    /// never retried; timeouts are terminal for the call chain.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RegistryError::Network(_))
    }

    /// Truncate a response body to avoid dragging huge payloads into logs
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RegistryError::NetworkTimeout
        } else {
            RegistryError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Storage(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the registry.
pub type Result<T> = std::result::Result<T, RegistryError>;
