//! Application-level errors

use domain::ValidationError;
use thiserror::Error;

use crate::ports::ProviderErrorKind;

/// Errors that can occur in the application layer
///
/// Provider errors never appear here directly: the calculator either
/// recovers from them or folds both attempts into `ServiceUnavailable`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// Caller input rejected before any provider was contacted
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Primary and fallback both failed
    #[error(
        "Distance could not be determined (primary: {primary}, fallback: {fallback})"
    )]
    ServiceUnavailable {
        primary: ProviderErrorKind,
        fallback: ProviderErrorKind,
    },
}

impl ApplicationError {
    /// Stable machine-readable code for API responses
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.code(),
            Self::ServiceUnavailable { .. } => "service_unavailable",
        }
    }
}
