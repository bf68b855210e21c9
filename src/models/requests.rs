//! Request DTOs for the registry API
//!
//! The endpoint multiplexes every operation over a single POST URL with an
//! `action` discriminator in the body. Requests deserialize into a closed
//! tagged enum, so unknown actions are rejected at parse time instead of
//! falling through a dispatch table.

use serde::{Deserialize, Serialize};

use super::student::StudentInput;

/// Request body for the registry endpoint, discriminated by `action`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ApiRequest {
    /// Append a new student row
    AddStudent {
        #[serde(flatten)]
        student: StudentInput,
    },
    /// List all student rows
    GetStudents,
    /// Fetch one student by id
    GetStudent {
        #[serde(rename = "studentId")]
        student_id: String,
    },
    /// Overwrite the mutable fields of one student
    UpdateStudent {
        #[serde(rename = "studentId")]
        student_id: String,
        #[serde(flatten)]
        student: StudentInput,
    },
    /// Remove one student row
    DeleteStudent {
        #[serde(rename = "studentId")]
        student_id: String,
    },
    /// Produce the next unused student id
    GenerateStudentId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_student_deserialize() {
        let json = r#"{"action":"addStudent","name":"Asha","rollNo":"CS101"}"#;
        let req: ApiRequest = serde_json::from_str(json).unwrap();
        match req {
            ApiRequest::AddStudent { student } => {
                assert_eq!(student.name, "Asha");
                assert_eq!(student.roll_no, "CS101");
            }
            other => panic!("expected AddStudent, got {:?}", other),
        }
    }

    #[test]
    fn test_get_students_deserialize() {
        let req: ApiRequest = serde_json::from_str(r#"{"action":"getStudents"}"#).unwrap();
        assert!(matches!(req, ApiRequest::GetStudents));
    }

    #[test]
    fn test_update_student_deserialize() {
        let json = r#"{"action":"updateStudent","studentId":"STU0001","name":"Asha"}"#;
        let req: ApiRequest = serde_json::from_str(json).unwrap();
        match req {
            ApiRequest::UpdateStudent {
                student_id,
                student,
            } => {
                assert_eq!(student_id, "STU0001");
                assert_eq!(student.name, "Asha");
            }
            other => panic!("expected UpdateStudent, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_action_rejected_at_parse_time() {
        let result = serde_json::from_str::<ApiRequest>(r#"{"action":"dropTables"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_action_rejected() {
        let result = serde_json::from_str::<ApiRequest>(r#"{"name":"Asha"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_action_tag() {
        let req = ApiRequest::DeleteStudent {
            student_id: "STU0002".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"action\":\"deleteStudent\""));
        assert!(json.contains("\"studentId\":\"STU0002\""));
    }
}
