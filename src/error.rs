//! Error types for the audit client.
//!
//! This module provides structured error handling with:
//! - `AuditError`: every way a scan can fail, already phrased for the user
//! - `Result<T>`: Type alias for Results using AuditError
//!
//! The controller never matches on variants; it only shows `to_string()`.

use thiserror::Error;

/// Message used when an upstream failure carries no text of its own.
pub const UNKNOWN_FAILURE: &str = "Unknown technical error during scan.";

// ============================================================================
// DOMAIN ERROR TYPE
// ============================================================================

#[derive(Debug, Error)]
pub enum AuditError {
    /// No credential configured
    #[error("API key is missing. Set GEMINI_API_KEY (or API_KEY) before starting a scan.")]
    Configuration,

    /// Upstream rate limit (HTTP 429 / RESOURCE_EXHAUSTED)
    #[error("Rate limit exceeded. Please wait a moment before trying again.")]
    RateLimited,

    /// Credential rejected (HTTP 401/403)
    #[error("API key permissions error. Please check your API key and project permissions.")]
    Unauthorized,

    /// Empty, non-JSON or schema-incomplete model output
    #[error("Audit failed: {0}")]
    ResponseFormat(String),

    /// Any other upstream answer
    #[error("Audit failed: {}", non_empty_or_fallback(.0))]
    Upstream(String),

    /// Transport level failure before a response arrived
    #[error("Audit failed: {}", non_empty_or_fallback(.0))]
    Network(String),
}

fn non_empty_or_fallback(message: &str) -> &str {
    if message.trim().is_empty() {
        UNKNOWN_FAILURE
    } else {
        message
    }
}

impl AuditError {
    pub fn response_format(msg: impl Into<String>) -> Self {
        Self::ResponseFormat(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Whether trying again later could reasonably succeed.
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::Configuration | Self::Unauthorized)
    }
}

impl From<reqwest::Error> for AuditError {
    fn from(error: reqwest::Error) -> Self {
        if error.status() == Some(reqwest::StatusCode::TOO_MANY_REQUESTS) {
            return Self::RateLimited;
        }
        Self::Network(error.to_string())
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(error: serde_json::Error) -> Self {
        Self::ResponseFormat(format!("The model returned invalid JSON ({error})."))
    }
}

/// Result type alias using AuditError.
pub type Result<T> = std::result::Result<T, AuditError>;
