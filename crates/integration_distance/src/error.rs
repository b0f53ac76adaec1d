//! Distance Matrix error types

use thiserror::Error;

/// Errors that can occur while querying the Distance Matrix API
#[derive(Debug, Error)]
pub enum DistanceMatrixError {
    /// No API key configured; no request was sent
    #[error("Distance Matrix API key is not configured")]
    MissingApiKey,

    /// The API rejected the credential (HTTP 401/403 or `REQUEST_DENIED`)
    #[error("Request denied: {0}")]
    Unauthorized(String),

    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Non-success HTTP status
    #[error("Request failed with HTTP {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// Top-level API status other than `OK`
    #[error("API returned status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    ApiStatus {
        /// The status string
        status: String,
        /// Optional `error_message` from the body
        message: Option<String>,
    },

    /// The element for the origin/destination pair has no route
    #[error("No route found ({status})")]
    NoRoute {
        /// Element status (`ZERO_RESULTS`, `NOT_FOUND`, ...)
        status: String,
    },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
