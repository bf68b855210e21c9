//! Response DTOs for the registry API
//!
//! Every action returns the same envelope: `{success, message?, students?,
//! student?, studentId?}`. Protocol-level failures (duplicate roll number,
//! unknown action, missing record) ride in this envelope with HTTP 200;
//! transport failures are the only non-2xx paths.

use serde::{Deserialize, Serialize};

use super::student::Student;

/// Response envelope shared by all actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Whether the action succeeded
    pub success: bool,
    /// Human-readable outcome, present on errors and mutations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Full student list, present for `getStudents`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<Student>>,
    /// Single record, present for `getStudent` and mutations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    /// Generated id, present for `generateStudentId`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
}

impl ApiResponse {
    /// Creates a failure envelope with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Creates a success envelope carrying the full student list.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            success: true,
            students: Some(students),
            ..Self::default()
        }
    }

    /// Creates a success envelope carrying one record and a message.
    pub fn with_student(message: impl Into<String>, student: Student) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            student: Some(student),
            ..Self::default()
        }
    }

    /// Creates a success envelope carrying only a message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Creates a success envelope carrying a generated id.
    pub fn with_student_id(student_id: impl Into<String>) -> Self {
        Self {
            success: true,
            student_id: Some(student_id.into()),
            ..Self::default()
        }
    }
}
