//! Error types and error handling for the application
//!
//! This module defines the error taxonomy of the gateway and converts each
//! variant to an HTTP response. Core modules return `Result<_, AppError>`;
//! only the `IntoResponse` impl here produces HTTP-shaped output.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Every failure a request can hit is represented by this enum and converted
/// to a JSON error body at the handler boundary. Nothing is retried; no
/// failure is fatal to the process.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required request field was missing or empty
    #[error("{0}")]
    Validation(String),

    /// The model endpoint returned a non-success HTTP status
    #[error("API request failed with status {status}")]
    UpstreamStatus {
        /// HTTP status code returned by the model endpoint
        status: u16,
        /// Raw response body, preserved for diagnosis
        body: String,
    },

    /// The model endpoint returned 2xx but no usable candidate content
    #[error("Unexpected API response format")]
    UnexpectedResponse,

    /// Internal server error (catch-all for unexpected errors)
    #[error("Server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            AppError::UpstreamStatus { body, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string(), "details": body }),
            ),
            AppError::UnexpectedResponse | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
