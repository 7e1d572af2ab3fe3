//! Gemini API request/response types
//!
//! Structs that mirror the Gemini API JSON wire format. Field names are
//! camelCase on the wire (`generationConfig`, `topK`, `maxOutputTokens`).

use serde::{Deserialize, Serialize};

/// Top-k sampling limit shared by both generation presets
pub const TOP_K: i32 = 40;

/// Nucleus sampling threshold shared by both generation presets
pub const TOP_P: f64 = 0.95;

/// Output token cap shared by both generation presets
pub const MAX_OUTPUT_TOKENS: i32 = 8192;

/// Request structure for the Gemini API
#[derive(Serialize, Debug)]
pub struct GeminiRequest {
    /// List of content items to send (a single instruction block)
    pub contents: Vec<RequestContent>,
    /// Generation configuration
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

/// Content structure for requests
#[derive(Serialize, Debug)]
pub struct RequestContent {
    /// List of content parts
    pub parts: Vec<RequestPart>,
}

/// A single part for requests (typically text)
#[derive(Serialize, Debug)]
pub struct RequestPart {
    /// The text content
    pub text: String,
}

/// Generation configuration for requests
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f64,
    /// Top-k sampling limit
    pub top_k: i32,
    /// Nucleus sampling threshold
    pub top_p: f64,
    /// Maximum number of output tokens
    pub max_output_tokens: i32,
}

impl GenerationConfig {
    /// Preset for generating new code
    pub fn generation() -> Self {
        Self {
            temperature: 0.2,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }

    /// Preset for fixing existing code (lower temperature)
    pub fn fix() -> Self {
        Self {
            temperature: 0.1,
            ..Self::generation()
        }
    }
}

/// Top-level Gemini API response
#[derive(Deserialize, Debug)]
pub struct GeminiResponse {
    /// List of candidate responses from the model
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Optional feedback about the prompt (e.g., if it was blocked)
    #[serde(default, rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// A single candidate response from the model
#[derive(Deserialize, Debug)]
pub struct Candidate {
    /// The content of this candidate
    #[serde(default)]
    pub content: Content,
    /// Why the model stopped generating (if applicable)
    #[serde(default, rename = "finishReason")]
    #[allow(dead_code)] // Part of API response format, may be used in future
    pub finish_reason: Option<String>,
}

/// Content structure containing parts of the response
#[derive(Deserialize, Debug, Default)]
pub struct Content {
    /// List of content parts (typically one text part)
    #[serde(default)]
    pub parts: Vec<Part>,
    /// Role of the content (e.g., "model")
    #[serde(default)]
    #[allow(dead_code)] // Part of API response format, may be used in future
    pub role: String,
}

/// A single part of content (typically text)
#[derive(Deserialize, Debug)]
pub struct Part {
    /// The text content of this part
    pub text: String,
}

/// Feedback about the prompt (e.g., if it was blocked)
#[derive(Deserialize, Debug)]
pub struct PromptFeedback {
    /// Reason the prompt was blocked (if applicable)
    #[serde(default, rename = "blockReason")]
    pub block_reason: Option<String>,
}
