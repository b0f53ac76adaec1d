//! Fallback estimate adapter - Implements DistancePort using ai_core
//!
//! Asks the generative service for a straight-line estimate and runs the
//! reply through the distance extraction grammar.

use std::sync::Arc;

use ai_core::{InferenceEngine, InferenceError, InferenceRequest};
use application::ports::{DistancePort, ProviderError};
use async_trait::async_trait;
use domain::{DistanceResult, Location};
use tracing::{debug, instrument, warn};

use crate::distance_extraction::extract_distance;

/// Build the estimation prompt for two locations
pub(crate) fn estimate_prompt(origin: &Location, destination: &Location) -> String {
    format!(
        "Estimate the distance between these two places.\n\
         From: {}\n\
         To: {}\n\n\
         Reply with ONLY a JSON object of the form {{\"distance_km\": <number>}} \
         and nothing else.",
        origin.describe(),
        destination.describe()
    )
}

/// Generative distance provider used when the routing service fails
pub struct FallbackEstimateAdapter {
    engine: Arc<dyn InferenceEngine>,
}

impl std::fmt::Debug for FallbackEstimateAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackEstimateAdapter")
            .field("model", &self.engine.default_model())
            .finish_non_exhaustive()
    }
}

impl FallbackEstimateAdapter {
    /// Create a new adapter over an inference engine
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self { engine }
    }

    /// Classify an inference error
    pub(crate) fn classify(err: InferenceError) -> ProviderError {
        let message = err.to_string();
        match err {
            InferenceError::MissingApiKey | InferenceError::Unauthorized(_) => {
                ProviderError::config_missing(message)
            },
            InferenceError::Timeout(_) => ProviderError::timeout(message),
            InferenceError::ConnectionFailed(_)
            | InferenceError::RequestFailed(_)
            | InferenceError::InvalidResponse(_)
            | InferenceError::RateLimited
            | InferenceError::ServerError(_) => ProviderError::upstream(message),
        }
    }
}

#[async_trait]
impl DistancePort for FallbackEstimateAdapter {
    #[instrument(skip_all, fields(provider = "fallback"))]
    async fn distance(
        &self,
        origin: &Location,
        destination: &Location,
    ) -> Result<DistanceResult, ProviderError> {
        let request = InferenceRequest::simple(estimate_prompt(origin, destination));

        let response = self
            .engine
            .generate(request)
            .await
            .map_err(Self::classify)?;

        extract_distance(&response.content)
            .inspect(|d| debug!(meters = d.distance_meters, "Estimate extracted"))
            .map_err(|e| {
                warn!(error = %e, "Estimate reply rejected");
                ProviderError::unparsable(e.to_string())
            })
    }

    fn is_configured(&self) -> bool {
        self.engine.has_api_key()
    }

    fn name(&self) -> &'static str {
        "generative-estimate"
    }
}
