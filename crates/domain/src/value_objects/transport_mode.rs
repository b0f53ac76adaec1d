//! Transport mode value objects

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A named fictional delivery method
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportMode {
    /// On foot
    Walking,
    /// Through water, the whole way
    Swimming,
    /// Carried by a homing pigeon
    Pigeon,
    /// Hand over hand, vertically if necessary
    RockClimbing,
}

impl TransportMode {
    /// All modes in canonical order
    pub const ALL: [Self; 4] = [
        Self::Walking,
        Self::Swimming,
        Self::Pigeon,
        Self::RockClimbing,
    ];

    /// Wire name of the mode
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Swimming => "swimming",
            Self::Pigeon => "pigeon",
            Self::RockClimbing => "rock-climbing",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownMode(s.to_string()))
    }
}

/// A transport mode together with its fixed speed and description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeSpec {
    /// The mode this entry describes
    pub mode: TransportMode,
    /// Fixed travel speed in km/h (always > 0)
    #[serde(rename = "speedKmH")]
    pub speed_kmh: f64,
    /// Human-readable description
    pub description: String,
}

impl ModeSpec {
    /// Create a new mode specification
    pub fn new(mode: TransportMode, speed_kmh: f64, description: impl Into<String>) -> Self {
        Self {
            mode,
            speed_kmh,
            description: description.into(),
        }
    }
}
