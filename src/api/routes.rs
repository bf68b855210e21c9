//! API Routes
//!
//! Configures the Axum router for the registry endpoint.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{exec_handler, AppState};

/// Creates the main router.
///
/// # Endpoints
/// - `POST /exec` - Action-multiplexed registry endpoint
/// - `GET /health` - Health check
///
/// # Middleware
/// - CORS: Allows any origin (the registry front end is served separately)
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/exec", post(exec_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for GET /health
async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
