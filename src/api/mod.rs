//! API module
//!
//! Contains HTTP request handlers for the code generation endpoints and the
//! router wiring them together.

pub mod handlers;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Build the application router
///
/// Middleware (request IDs, tracing, CORS) is layered on top by the binary;
/// tests exercise the bare routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate", post(handlers::generate_code))
        .route("/api/fix", post(handlers::fix_code))
        .route("/api/health", get(handlers::health_check))
        .with_state(state)
}
