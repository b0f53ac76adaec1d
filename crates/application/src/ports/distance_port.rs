//! Distance provider port
//!
//! Both the routing service and the generative estimator sit behind this
//! port. Adapters classify every failure into a [`ProviderErrorKind`]; raw
//! transport errors never cross it.

use std::fmt;

use async_trait::async_trait;
use domain::{DistanceResult, Location};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a provider failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderErrorKind {
    /// Credential absent or rejected
    ConfigMissing,
    /// Network error, 5xx, rate limiting or a malformed body
    UpstreamUnavailable,
    /// The provider found no route between the two points
    NoRoute,
    /// The attempt did not finish in time
    Timeout,
    /// A generative reply held no distance the extractor accepts
    UnparsableResponse,
}

impl ProviderErrorKind {
    /// Wire name of the kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigMissing => "config_missing",
            Self::UpstreamUnavailable => "upstream_unavailable",
            Self::NoRoute => "no_route",
            Self::Timeout => "timeout",
            Self::UnparsableResponse => "unparsable_response",
        }
    }
}

impl fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified provider failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ProviderError {
    /// Failure classification
    pub kind: ProviderErrorKind,
    /// Detail for logs; never shown to API callers
    pub message: String,
}

impl ProviderError {
    /// Create a new provider error
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Credential absent or rejected
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::ConfigMissing, message)
    }

    /// Upstream unreachable or misbehaving
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::UpstreamUnavailable, message)
    }

    /// No route between the points
    pub fn no_route(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::NoRoute, message)
    }

    /// Attempt exceeded its time budget
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Timeout, message)
    }

    /// Reply could not be turned into a distance
    pub fn unparsable(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::UnparsableResponse, message)
    }
}

/// Port for computing the distance between two locations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DistancePort: Send + Sync {
    /// Compute the distance between two validated locations
    ///
    /// One attempt, no retries. Mode suitability is not checked here.
    async fn distance(
        &self,
        origin: &Location,
        destination: &Location,
    ) -> Result<DistanceResult, ProviderError>;

    /// Whether a credential is present
    fn is_configured(&self) -> bool;

    /// Short provider name for logs
    fn name(&self) -> &'static str;
}
