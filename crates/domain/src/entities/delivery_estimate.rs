//! Delivery estimate entity

use serde::{Deserialize, Serialize};

use super::distance_result::DistanceResult;
use crate::value_objects::{DeliveryTime, Location, ModeSpec, TransportMode};

/// Which provider produced the distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateMethod {
    /// The routing service answered
    Primary,
    /// The generative service guessed
    Fallback,
}

impl EstimateMethod {
    /// Whether distances from this method are approximations
    #[must_use]
    pub const fn is_estimate(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// The full answer to "how long would delivery take?"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryEstimate {
    pub distance_meters: f64,
    pub distance_text: String,
    /// Provider duration, reported but never used in the calculation
    pub duration_seconds: Option<f64>,
    pub delivery_time_seconds: f64,
    pub delivery_time_text: String,
    pub origin: Location,
    pub destination: Location,
    pub transport_mode: TransportMode,
    #[serde(rename = "speedKmH")]
    pub speed_kmh: f64,
    /// True iff `method` is fallback
    pub is_estimate: bool,
    pub method: EstimateMethod,
}

impl DeliveryEstimate {
    /// Combine a distance and the delivery time computed for `mode`
    #[must_use]
    pub fn new(
        distance: &DistanceResult,
        time: DeliveryTime,
        origin: Location,
        destination: Location,
        mode: &ModeSpec,
        method: EstimateMethod,
    ) -> Self {
        Self {
            distance_meters: distance.distance_meters,
            distance_text: distance.distance_text.clone(),
            duration_seconds: distance.duration_seconds,
            delivery_time_seconds: time.seconds(),
            delivery_time_text: time.format_text(),
            origin,
            destination,
            transport_mode: mode.mode,
            speed_kmh: mode.speed_kmh,
            is_estimate: method.is_estimate(),
            method,
        }
    }
}
