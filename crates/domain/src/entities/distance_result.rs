//! Distance result entity

use serde::{Deserialize, Serialize};

/// Distance between two locations as reported by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceResult {
    /// Distance in meters
    pub distance_meters: f64,
    /// Provider's human-readable rendering of the distance
    pub distance_text: String,
    /// Provider's own travel duration, informational only
    pub duration_seconds: Option<f64>,
}

impl DistanceResult {
    /// Create a result with no provider duration
    pub fn new(distance_meters: f64, distance_text: impl Into<String>) -> Self {
        Self {
            distance_meters,
            distance_text: distance_text.into(),
            duration_seconds: None,
        }
    }

    /// Attach the provider's travel duration
    #[must_use]
    pub const fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = Some(seconds);
        self
    }
}
