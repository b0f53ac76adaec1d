//! Inference errors

use thiserror::Error;

/// Errors that can occur during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// No API key configured; no request was sent
    #[error("Inference API key is not configured")]
    MissingApiKey,

    /// Credential rejected by the server (HTTP 401/403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to connect to inference server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request rejected by the server (other 4xx)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Server error (5xx, including overload)
    #[error("Server error: {0}")]
    ServerError(String),
}
