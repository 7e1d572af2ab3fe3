//! Gemini API client
//!
//! Direct HTTP client for calling the Gemini `generateContent` endpoint.
//! One attempt per request, no retry; timeouts are whatever the underlying
//! client defaults to.

use crate::config::GeminiConfig;
use crate::error::AppError;
use crate::gemini::types::{GeminiRequest, GeminiResponse};
use anyhow::anyhow;

/// Call the Gemini API with a prepared request payload
///
/// Performs a single POST to `{base}/models/{model}:generateContent` with the
/// API key as a query parameter. Returns the raw text of the first
/// candidate's first part; extracting the code payload from it is the
/// caller's concern.
///
/// # Errors
/// * `AppError::UpstreamStatus` if the endpoint returns a non-success status
/// * `AppError::UnexpectedResponse` if the response carries no usable candidate
/// * `AppError::Internal` if the request cannot be sent or the body cannot be decoded
pub async fn generate_content(
    client: &reqwest::Client,
    config: &GeminiConfig,
    request: &GeminiRequest,
) -> Result<String, AppError> {
    let url = format!(
        "{}/models/{}:generateContent?key={}",
        config.api_base_url, config.model, config.api_key
    );

    let prompt_len: usize = request
        .contents
        .iter()
        .flat_map(|content| &content.parts)
        .map(|part| part.text.len())
        .sum();

    tracing::debug!(
        model = %config.model,
        prompt_len = prompt_len,
        "Calling Gemini API"
    );

    let response = client.post(&url).json(request).send().await.map_err(|e| {
        AppError::Internal(anyhow!("Failed to send HTTP request to Gemini API: {}", e))
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        tracing::error!(
            status_code = status.as_u16(),
            error_body = %body,
            "Gemini API returned error status"
        );

        return Err(AppError::UpstreamStatus {
            status: status.as_u16(),
            body,
        });
    }

    let response_body = response.text().await.map_err(|e| {
        AppError::Internal(anyhow!(
            "Failed to read response body from Gemini API: {}",
            e
        ))
    })?;

    let parsed: GeminiResponse = serde_json::from_str(&response_body).map_err(|e| {
        AppError::Internal(anyhow!(
            "Failed to parse JSON response from Gemini API: {} - Response body: {}",
            e,
            response_body
        ))
    })?;

    if let Some(feedback) = &parsed.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            tracing::warn!(block_reason = %reason, "Gemini API blocked the prompt");
        }
    }

    let text = parsed
        .candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
        .map(|part| part.text.clone())
        .ok_or(AppError::UnexpectedResponse)?;

    tracing::debug!(
        response_len = text.len(),
        "Successfully received response from Gemini API"
    );

    Ok(text)
}
