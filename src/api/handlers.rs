//! API Handlers
//!
//! The registry endpoint multiplexes every operation over one POST URL. The
//! handler parses the `action`-tagged request body and dispatches with an
//! exhaustive match; anything that fails to parse is answered with the
//! protocol-level `Invalid action` envelope at HTTP 200.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{ApiRequest, ApiResponse, StudentInput};
use crate::sheet::SheetStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe row store
    pub sheet: Arc<RwLock<SheetStore>>,
}

impl AppState {
    /// Creates a new AppState with the given row store.
    pub fn new(sheet: SheetStore) -> Self {
        Self {
            sheet: Arc::new(RwLock::new(sheet)),
        }
    }
}

/// Handler for POST /exec
///
/// Parses the action body and dispatches. Every outcome, including protocol
/// errors, is an `ApiResponse` envelope.
pub async fn exec_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Json<ApiResponse> {
    let request = match serde_json::from_value::<ApiRequest>(body) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "request body did not parse as a known action");
            return Json(ApiResponse::error("Invalid action"));
        }
    };
    Json(dispatch(&state, request).await)
}

async fn dispatch(state: &AppState, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::AddStudent { student } => add_student(state, student).await,
        ApiRequest::GetStudents => {
            let sheet = state.sheet.read().await;
            ApiResponse::with_students(sheet.list())
        }
        ApiRequest::GetStudent { student_id } => {
            let sheet = state.sheet.read().await;
            match sheet.get(&student_id) {
                Ok(student) => ApiResponse {
                    success: true,
                    student: Some(student),
                    ..ApiResponse::default()
                },
                Err(e) => ApiResponse::error(e.to_string()),
            }
        }
        ApiRequest::UpdateStudent {
            student_id,
            student,
        } => update_student(state, student_id, student).await,
        ApiRequest::DeleteStudent { student_id } => {
            let mut sheet = state.sheet.write().await;
            match sheet.delete(&student_id) {
                Ok(()) => ApiResponse::with_message("Student deleted successfully"),
                Err(e) => ApiResponse::error(e.to_string()),
            }
        }
        ApiRequest::GenerateStudentId => {
            let sheet = state.sheet.read().await;
            ApiResponse::with_student_id(sheet.generate_id())
        }
    }
}

async fn add_student(state: &AppState, input: StudentInput) -> ApiResponse {
    if let Err(e) = input.validate() {
        return ApiResponse::error(e.to_string());
    }
    let mut sheet = state.sheet.write().await;
    match sheet.add(&input) {
        Ok(student) => ApiResponse::with_student("Student added successfully", student),
        Err(e) => ApiResponse::error(e.to_string()),
    }
}

async fn update_student(state: &AppState, student_id: String, input: StudentInput) -> ApiResponse {
    if let Err(e) = input.validate() {
        return ApiResponse::error(e.to_string());
    }
    let mut sheet = state.sheet.write().await;
    match sheet.update(&student_id, &input) {
        Ok(student) => ApiResponse::with_student("Student updated successfully", student),
        Err(e) => ApiResponse::error(e.to_string()),
    }
}
