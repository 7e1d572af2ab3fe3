//! API handlers for code generation
//!
//! This module contains the HTTP request handlers for the gateway. Each
//! handler validates its input, builds the model request, performs the
//! outbound call, and extracts the code payload from the model's answer.

use crate::error::AppError;
use crate::gemini::prompt::GenerationIntent;
use crate::gemini::{client, extract, prompt};
use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// Request types
#[derive(Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
}

#[derive(Deserialize)]
pub struct FixRequest {
    pub code: Option<String>,
    pub error: Option<String>,
}

// Response types
#[derive(Serialize)]
pub struct CodeResponse {
    pub code: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

// POST /api/generate - Generate code from a natural-language prompt
pub async fn generate_code(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<CodeResponse>, AppError> {
    let prompt = request
        .prompt
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation("Prompt is required".to_string()))?;

    run_intent(&state, &GenerationIntent::Generate { prompt }).await
}

// POST /api/fix - Fix code, optionally guided by an error message
pub async fn fix_code(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FixRequest>,
) -> Result<Json<CodeResponse>, AppError> {
    let code = request
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::Validation("Code is required".to_string()))?;

    run_intent(
        &state,
        &GenerationIntent::Fix {
            code,
            error: request.error,
        },
    )
    .await
}

// GET /api/health - Health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Backend service is running".to_string(),
    })
}

// Shared pipeline: build the request, call the model, extract the code
// payload from the answer.
async fn run_intent(
    state: &AppState,
    intent: &GenerationIntent,
) -> Result<Json<CodeResponse>, AppError> {
    let request = prompt::build_request(intent);
    let answer =
        client::generate_content(&state.http_client, &state.config.gemini, &request).await?;
    let code = extract::extract_code(&answer);

    Ok(Json(CodeResponse { code }))
}
