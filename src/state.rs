//! Shared application state
//!
//! The service is stateless: the only data shared between requests is the
//! immutable configuration and the HTTP client reused for outbound Gemini
//! calls, so no locking is needed.

use crate::config::Config;

/// Shared application state, wrapped in an `Arc` by the router
pub struct AppState {
    /// Immutable configuration loaded at startup
    pub config: Config,
    /// Shared HTTP client for outbound calls (implicit connection pooling)
    pub http_client: reqwest::Client,
}

impl AppState {
    /// Create application state from configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}
