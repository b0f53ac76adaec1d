//! Delivery time calculator
//!
//! Resolves a distance through the primary provider, falls back to the
//! generative estimator on any primary failure, and turns the distance into
//! a delivery time at the mode's fixed speed. Provider durations are
//! reported but never used in the arithmetic.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::{
    DeliveryEstimate, DeliveryTime, DistanceResult, EstimateMethod, Location, LocationInput,
    ModeSpec, TransportMode,
};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, error, info, instrument, warn};

use super::location_normalizer::normalize_route;
use super::mode_registry::ModeRegistry;
use crate::error::ApplicationError;
use crate::ports::{DistancePort, ProviderError};

/// Default upper bound for a single provider attempt in seconds
pub const DEFAULT_ATTEMPT_TIMEOUT_SECS: u64 = 15;

/// Whether a provider has a credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderState {
    Configured,
    Unconfigured,
}

impl From<bool> for ProviderState {
    fn from(configured: bool) -> Self {
        if configured {
            Self::Configured
        } else {
            Self::Unconfigured
        }
    }
}

/// Configuration state of both providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub primary: ProviderState,
    pub fallback: ProviderState,
}

/// A distance together with the provider that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDistance {
    pub distance: DistanceResult,
    pub method: EstimateMethod,
}

/// Application service computing delivery estimates
pub struct DeliveryService {
    primary: Arc<dyn DistancePort>,
    fallback: Arc<dyn DistancePort>,
    registry: &'static ModeRegistry,
    attempt_timeout: Duration,
}

impl fmt::Debug for DeliveryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryService")
            .field("primary", &self.primary.name())
            .field("fallback", &self.fallback.name())
            .field("attempt_timeout", &self.attempt_timeout)
            .finish_non_exhaustive()
    }
}

impl DeliveryService {
    /// Create a new delivery service
    pub fn new(primary: Arc<dyn DistancePort>, fallback: Arc<dyn DistancePort>) -> Self {
        Self {
            primary,
            fallback,
            registry: ModeRegistry::global(),
            attempt_timeout: Duration::from_secs(DEFAULT_ATTEMPT_TIMEOUT_SECS),
        }
    }

    /// Override the per-attempt timeout
    #[must_use]
    pub const fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    /// The mode registry used by this service
    #[must_use]
    pub const fn registry(&self) -> &'static ModeRegistry {
        self.registry
    }

    /// Configuration state of both providers
    #[must_use]
    pub fn provider_status(&self) -> ProviderStatus {
        ProviderStatus {
            primary: self.primary.is_configured().into(),
            fallback: self.fallback.is_configured().into(),
        }
    }

    /// Estimate delivery for a single mode
    ///
    /// The mode is checked before the locations; neither failure reaches a
    /// provider.
    ///
    /// # Errors
    ///
    /// `Validation` for bad input, `ServiceUnavailable` if both providers fail.
    #[instrument(skip(self, origin, destination))]
    pub async fn calculate(
        &self,
        origin: &LocationInput,
        destination: &LocationInput,
        mode: &str,
    ) -> Result<DeliveryEstimate, ApplicationError> {
        let spec = self.registry.resolve(mode)?;
        let (origin, destination) = normalize_route(origin, destination)?;

        let resolved = self.compute_distance(&origin, &destination).await?;
        let time = Self::compute_delivery_time(&resolved.distance, spec);

        Ok(DeliveryEstimate::new(
            &resolved.distance,
            time,
            origin,
            destination,
            spec,
            resolved.method,
        ))
    }

    /// Estimate delivery for every registered mode
    ///
    /// The distance is computed once and reused for all modes.
    ///
    /// # Errors
    ///
    /// `Validation` for bad input, `ServiceUnavailable` if both providers fail.
    #[instrument(skip_all)]
    pub async fn calculate_all(
        &self,
        origin: &LocationInput,
        destination: &LocationInput,
    ) -> Result<BTreeMap<TransportMode, DeliveryEstimate>, ApplicationError> {
        let (origin, destination) = normalize_route(origin, destination)?;

        let resolved = self.compute_distance(&origin, &destination).await?;

        Ok(self
            .registry
            .list_all()
            .iter()
            .map(|spec| {
                let estimate = DeliveryEstimate::new(
                    &resolved.distance,
                    Self::compute_delivery_time(&resolved.distance, spec),
                    origin.clone(),
                    destination.clone(),
                    spec,
                    resolved.method,
                );
                (spec.mode, estimate)
            })
            .collect())
    }

    /// Resolve the distance between two validated locations
    ///
    /// Tries the primary provider once; on any failure tries the fallback
    /// once. Only if both fail is an error returned.
    ///
    /// # Errors
    ///
    /// `ServiceUnavailable` carrying both failure kinds.
    #[instrument(skip_all, fields(origin = %origin, destination = %destination))]
    pub async fn compute_distance(
        &self,
        origin: &Location,
        destination: &Location,
    ) -> Result<ResolvedDistance, ApplicationError> {
        let primary_err = match self.attempt(self.primary.as_ref(), origin, destination).await {
            Ok(distance) => {
                debug!(
                    provider = self.primary.name(),
                    meters = distance.distance_meters,
                    "Primary provider resolved distance"
                );
                return Ok(ResolvedDistance {
                    distance,
                    method: EstimateMethod::Primary,
                });
            },
            Err(e) => e,
        };

        warn!(
            provider = self.primary.name(),
            kind = %primary_err.kind,
            error = %primary_err.message,
            "Primary provider failed, trying fallback"
        );

        match self.attempt(self.fallback.as_ref(), origin, destination).await {
            Ok(distance) => {
                info!(
                    provider = self.fallback.name(),
                    meters = distance.distance_meters,
                    "Fallback provider estimated distance"
                );
                Ok(ResolvedDistance {
                    distance,
                    method: EstimateMethod::Fallback,
                })
            },
            Err(fallback_err) => {
                error!(
                    primary_kind = %primary_err.kind,
                    fallback_kind = %fallback_err.kind,
                    error = %fallback_err.message,
                    "Both distance providers failed"
                );
                Err(ApplicationError::ServiceUnavailable {
                    primary: primary_err.kind,
                    fallback: fallback_err.kind,
                })
            },
        }
    }

    /// Delivery time for a distance at a mode's fixed speed
    #[must_use]
    pub fn compute_delivery_time(distance: &DistanceResult, mode: &ModeSpec) -> DeliveryTime {
        DeliveryTime::from_distance(distance.distance_meters, mode.speed_kmh)
    }

    async fn attempt(
        &self,
        port: &dyn DistancePort,
        origin: &Location,
        destination: &Location,
    ) -> Result<DistanceResult, ProviderError> {
        match timeout(self.attempt_timeout, port.distance(origin, destination)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::timeout(format!(
                "{} did not answer within {:?}",
                port.name(),
                self.attempt_timeout
            ))),
        }
    }
}
