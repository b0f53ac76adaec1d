//! Distance Matrix data models

use serde::{Deserialize, Serialize};

/// Distance between one origin and one destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDistance {
    /// Distance in meters
    pub meters: f64,
    /// Human-readable distance, e.g. "2,789 km"
    pub text: String,
    /// Travel duration in seconds for the requested travel mode
    pub duration_seconds: Option<f64>,
}
