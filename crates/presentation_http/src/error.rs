//! API error handling
//!
//! Every failure is rendered as `{success: false, message, code, details?}`.
//! Provider detail never reaches the body; a service-unavailable response
//! only names the failure kind of each provider.

use application::{ApplicationError, ProviderErrorKind};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or oversized request body
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Input rejected by the domain rules
    #[error("{message}")]
    Validation {
        /// Human-readable reason
        message: String,
        /// Stable code, e.g. `unknown_mode`
        code: &'static str,
    },

    /// Both distance providers failed
    #[error("{message}")]
    ServiceUnavailable {
        /// Human-readable reason
        message: String,
        /// Primary failure kind
        primary: ProviderErrorKind,
        /// Fallback failure kind
        fallback: ProviderErrorKind,
    },
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn body(&self) -> ErrorResponse {
        let (message, code, details) = match self {
            Self::BadRequest(msg) => (msg.clone(), "invalid_request", None),
            Self::Validation { message, code } => (message.clone(), *code, None),
            Self::ServiceUnavailable {
                message,
                primary,
                fallback,
            } => (
                message.clone(),
                "service_unavailable",
                Some(serde_json::json!({
                    "primary": primary,
                    "fallback": fallback,
                })),
            ),
        };

        ErrorResponse {
            success: false,
            message,
            code: code.to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        let message = err.to_string();
        let code = err.code();
        match err {
            ApplicationError::Validation(_) => Self::Validation { message, code },
            ApplicationError::ServiceUnavailable { primary, fallback } => {
                Self::ServiceUnavailable {
                    message,
                    primary,
                    fallback,
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::ValidationError;

    use super::*;

    #[test]
    fn validation_maps_to_bad_request_with_code() {
        let err: ApiError = ApplicationError::from(ValidationError::UnknownMode("jetpack".into())).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let body = serde_json::to_value(err.body()).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "unknown_mode");
        assert_eq!(body["message"], "Unknown transport mode: jetpack");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn service_unavailable_carries_both_kinds() {
        let err: ApiError = ApplicationError::ServiceUnavailable {
            primary: ProviderErrorKind::Timeout,
            fallback: ProviderErrorKind::UnparsableResponse,
        }
        .into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = serde_json::to_value(err.body()).unwrap();
        assert_eq!(body["code"], "service_unavailable");
        assert_eq!(body["details"]["primary"], "timeout");
        assert_eq!(body["details"]["fallback"], "unparsable_response");
    }

    #[test]
    fn bad_request_uses_generic_code() {
        let err = ApiError::BadRequest("expected value at line 1".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().code, "invalid_request");
        assert_eq!(err.to_string(), "Bad request: expected value at line 1");
    }
}
