//! Request, response, and record models for the registry API
//!
//! This module defines the wire DTOs shared by the server handlers and the
//! request client, plus the student record schema itself.

pub mod requests;
pub mod responses;
pub mod student;

// Re-export commonly used types
pub use requests::ApiRequest;
pub use responses::ApiResponse;
pub use student::{Student, StudentInput};
