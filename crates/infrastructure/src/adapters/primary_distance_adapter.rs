//! Primary distance adapter - Implements DistancePort using integration_distance

use std::sync::Arc;

use application::ports::{DistancePort, ProviderError};
use async_trait::async_trait;
use domain::{DistanceResult, Location};
use integration_distance::{DistanceMatrixClient, DistanceMatrixError};
use tracing::{debug, instrument};

/// Routing-service distance provider backed by the Distance Matrix API
pub struct PrimaryDistanceAdapter {
    client: Arc<dyn DistanceMatrixClient>,
}

impl std::fmt::Debug for PrimaryDistanceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimaryDistanceAdapter")
            .field("configured", &self.client.has_api_key())
            .finish_non_exhaustive()
    }
}

impl PrimaryDistanceAdapter {
    /// Create a new adapter over a Distance Matrix client
    pub fn new(client: Arc<dyn DistanceMatrixClient>) -> Self {
        Self { client }
    }

    /// Classify a client error
    pub(crate) fn classify(err: DistanceMatrixError) -> ProviderError {
        let message = err.to_string();
        match err {
            DistanceMatrixError::MissingApiKey | DistanceMatrixError::Unauthorized(_) => {
                ProviderError::config_missing(message)
            },
            DistanceMatrixError::NoRoute { .. } => ProviderError::no_route(message),
            DistanceMatrixError::Timeout { .. } => ProviderError::timeout(message),
            DistanceMatrixError::ConnectionFailed(_)
            | DistanceMatrixError::RequestFailed { .. }
            | DistanceMatrixError::ApiStatus { .. }
            | DistanceMatrixError::ParseError(_) => ProviderError::upstream(message),
        }
    }
}

#[async_trait]
impl DistancePort for PrimaryDistanceAdapter {
    #[instrument(skip_all, fields(provider = "primary"))]
    async fn distance(
        &self,
        origin: &Location,
        destination: &Location,
    ) -> Result<DistanceResult, ProviderError> {
        let route = self
            .client
            .route(&origin.to_query_value(), &destination.to_query_value())
            .await
            .map_err(Self::classify)?;

        debug!(meters = route.meters, text = %route.text, "Route resolved");

        let result = DistanceResult::new(route.meters, route.text);
        Ok(match route.duration_seconds {
            Some(seconds) => result.with_duration(seconds),
            None => result,
        })
    }

    fn is_configured(&self) -> bool {
        self.client.has_api_key()
    }

    fn name(&self) -> &'static str {
        "distance-matrix"
    }
}
