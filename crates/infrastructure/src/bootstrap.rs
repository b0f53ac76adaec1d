//! Provider wiring
//!
//! Builds the HTTP clients from [`AppConfig`] and wraps them in the port
//! adapters. One inference engine is shared by the fallback estimator and
//! the location guesser.

use std::sync::Arc;

use ai_core::{AnthropicInferenceEngine, InferenceEngine, InferenceError};
use application::ports::{DistancePort, LocationGuessPort};
use integration_distance::{DistanceMatrixError, GoogleDistanceMatrixClient};
use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::{FallbackEstimateAdapter, LocationGuessAdapter, PrimaryDistanceAdapter};
use crate::config::AppConfig;

/// Failure while constructing the provider clients
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Distance Matrix client could not be built
    #[error("Failed to initialize distance client: {0}")]
    Distance(#[from] DistanceMatrixError),

    /// Inference engine could not be built
    #[error("Failed to initialize inference engine: {0}")]
    Inference(#[from] InferenceError),
}

/// The adapters behind every application port
#[derive(Clone)]
pub struct Providers {
    /// Routing-service distance provider
    pub primary: Arc<dyn DistancePort>,
    /// Generative distance estimator
    pub fallback: Arc<dyn DistancePort>,
    /// Generative email-domain locator
    pub guesser: Arc<dyn LocationGuessPort>,
}

impl std::fmt::Debug for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Providers")
            .field("primary", &self.primary.name())
            .field("fallback", &self.fallback.name())
            .finish_non_exhaustive()
    }
}

impl Providers {
    /// Build every provider from configuration
    ///
    /// Missing credentials are logged, not fatal: the affected provider
    /// fails fast with `config_missing` on use.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be initialized.
    pub fn from_config(config: &AppConfig) -> Result<Self, BootstrapError> {
        let matrix = GoogleDistanceMatrixClient::new(&config.distance.to_client_config())?;
        let engine: Arc<dyn InferenceEngine> = Arc::new(AnthropicInferenceEngine::new(
            config.estimate.to_inference_config(),
        )?);

        if !config.distance.has_api_key() {
            warn!("No distance API key configured; primary provider disabled");
        }
        if !config.estimate.has_api_key() {
            warn!("No estimate API key configured; fallback provider disabled");
        }

        let providers = Self {
            primary: Arc::new(PrimaryDistanceAdapter::new(Arc::new(matrix))),
            fallback: Arc::new(FallbackEstimateAdapter::new(Arc::clone(&engine))),
            guesser: Arc::new(LocationGuessAdapter::new(engine)),
        };

        info!(
            primary = providers.primary.is_configured(),
            fallback = providers.fallback.is_configured(),
            "Providers initialized"
        );

        Ok(providers)
    }
}
