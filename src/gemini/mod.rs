//! Gemini API integration
//!
//! Request construction, outbound HTTP client, and code extraction for the
//! Gemini `generateContent` endpoint.

pub mod client;
pub mod extract;
pub mod prompt;
pub mod types;
