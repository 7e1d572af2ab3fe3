//! Prompt construction for the Gemini API
//!
//! Translates a caller's intent into the instruction text and generation
//! configuration sent to the model.

use crate::gemini::types::{GeminiRequest, GenerationConfig, RequestContent, RequestPart};

/// What the caller wants the model to do
#[derive(Debug, Clone)]
pub enum GenerationIntent {
    /// Generate new code from a natural-language prompt
    Generate {
        /// The user's request text (non-empty, validated by the caller)
        prompt: String,
    },
    /// Fix existing code, optionally guided by an error message
    Fix {
        /// The code to fix (non-empty, validated by the caller)
        code: String,
        /// Error message observed when running the code, if any
        error: Option<String>,
    },
}

/// Build the Gemini request payload for an intent
///
/// Pure function of its input. Required fields are assumed non-empty; the
/// handler rejects invalid input before this point.
pub fn build_request(intent: &GenerationIntent) -> GeminiRequest {
    let (text, generation_config) = match intent {
        GenerationIntent::Generate { prompt } => (
            format!("Generate Python code for the following request: {prompt}. Provide only the code, with no explanations before or after."),
            GenerationConfig::generation(),
        ),
        GenerationIntent::Fix { code, error } => {
            let guidance = match error.as_deref() {
                Some(message) if !message.is_empty() => format!("Error message: {message}"),
                _ => "Identify and fix any issues in this code.".to_string(),
            };
            (
                format!("Fix the following Python code:\n\n{code}\n\n{guidance}\n\nProvide only the corrected code with no explanations before or after."),
                GenerationConfig::fix(),
            )
        }
    };

    GeminiRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart { text }],
        }],
        generation_config,
    }
}
