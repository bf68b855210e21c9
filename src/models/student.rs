//! Student record and input types
//!
//! The wire schema is all string-typed with camelCase field names; the
//! `createdAt`/`updatedAt` timestamps are RFC 3339 strings stamped by the
//! row store.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub father_name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub semester: String,
    pub roll_no: String,
    pub created_at: String,
    pub updated_at: String,
}

/// The mutable fields of a student record, as submitted by callers.
///
/// All fields default to empty strings so that missing fields surface as
/// field-level validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub father_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub roll_no: String,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

impl StudentInput {
    /// Validates all fields, reporting the first offending field.
    ///
    /// Deterministic failures: never retried, surfaced immediately.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::validation("name", "name is required"));
        }
        if self.father_name.trim().is_empty() {
            return Err(RegistryError::validation(
                "fatherName",
                "father name is required",
            ));
        }
        if !email_pattern().is_match(self.email.trim()) {
            return Err(RegistryError::validation(
                "email",
                "must be a valid email address",
            ));
        }
        let phone = self.phone.trim();
        if phone.len() != 10 || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(RegistryError::validation(
                "phone",
                "must be a 10-digit number",
            ));
        }
        if self.course.trim().is_empty() {
            return Err(RegistryError::validation("course", "course is required"));
        }
        match self.semester.trim().parse::<u8>() {
            Ok(semester) if (1..=8).contains(&semester) => {}
            _ => {
                return Err(RegistryError::validation(
                    "semester",
                    "must be between 1 and 8",
                ))
            }
        }
        if self.roll_no.trim().is_empty() {
            return Err(RegistryError::validation("rollNo", "roll number is required"));
        }
        Ok(())
    }
}

impl Student {
    /// Builds a new record from validated input, stamping both timestamps.
    pub fn from_input(id: String, input: &StudentInput, now: &str) -> Self {
        Self {
            id,
            name: input.name.trim().to_string(),
            father_name: input.father_name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: input.phone.trim().to_string(),
            course: input.course.trim().to_string(),
            semester: input.semester.trim().to_string(),
            roll_no: input.roll_no.trim().to_string(),
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    pub fn valid_input() -> StudentInput {
        StudentInput {
            name: "Asha Verma".to_string(),
            father_name: "Ramesh Verma".to_string(),
            email: "asha.verma@example.com".to_string(),
            phone: "9876543210".to_string(),
            course: "Computer Science".to_string(),
            semester: "3".to_string(),
            roll_no: "CS101".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_missing_name_rejected() {
        let input = StudentInput {
            name: "  ".to_string(),
            ..valid_input()
        };
        match input.validate() {
            Err(RegistryError::Validation { field, .. }) => assert_eq!(field, "name"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_email_rejected() {
        for email in ["not-an-email", "a@b", "has space@example.com", ""] {
            let input = StudentInput {
                email: email.to_string(),
                ..valid_input()
            };
            match input.validate() {
                Err(RegistryError::Validation { field, .. }) => assert_eq!(field, "email"),
                other => panic!("expected email error for {:?}, got {:?}", email, other),
            }
        }
    }

    #[test]
    fn test_bad_phone_rejected() {
        for phone in ["12345", "98765432100", "98765abc10"] {
            let input = StudentInput {
                phone: phone.to_string(),
                ..valid_input()
            };
            match input.validate() {
                Err(RegistryError::Validation { field, .. }) => assert_eq!(field, "phone"),
                other => panic!("expected phone error for {:?}, got {:?}", phone, other),
            }
        }
    }

    #[test]
    fn test_semester_bounds() {
        for semester in ["0", "9", "abc", ""] {
            let input = StudentInput {
                semester: semester.to_string(),
                ..valid_input()
            };
            assert!(input.validate().is_err(), "semester {:?} should fail", semester);
        }
        for semester in ["1", "8"] {
            let input = StudentInput {
                semester: semester.to_string(),
                ..valid_input()
            };
            assert!(input.validate().is_ok(), "semester {:?} should pass", semester);
        }
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let input: StudentInput = serde_json::from_str(r#"{"name":"Asha"}"#).unwrap();
        assert_eq!(input.name, "Asha");
        assert_eq!(input.roll_no, "");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_student_serializes_camel_case() {
        let student = Student::from_input("STU0001".to_string(), &valid_input(), "2026-01-01T00:00:00Z");
        let json = serde_json::to_string(&student).unwrap();
        assert!(json.contains("\"fatherName\""));
        assert!(json.contains("\"rollNo\""));
        assert!(json.contains("\"createdAt\""));
    }
}
