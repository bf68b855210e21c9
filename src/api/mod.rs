//! API Module
//!
//! HTTP handlers and routing for the registry endpoint.
//!
//! # Endpoints
//! - `POST /exec` - Action-multiplexed registry endpoint
//! - `GET /health` - Health check

pub mod handlers;
pub mod routes;

pub use handlers::{exec_handler, AppState};
pub use routes::create_router;
