//! Domain-level errors

use thiserror::Error;

/// Input that cannot be turned into a usable request
///
/// Validation errors are never repaired by a provider, so the calculator
/// surfaces them immediately without attempting any lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Neither an address nor a full coordinate pair was supplied
    #[error("{field}: provide either 'address' or both 'lat' and 'lng'")]
    MissingLocation { field: String },

    /// Only one half of a coordinate pair was supplied
    #[error("{field}: 'lat' and 'lng' must be provided together")]
    IncompleteCoordinates { field: String },

    /// Latitude outside [-90, 90]
    #[error("{field}: latitude {value} is out of range (-90 to 90)")]
    LatitudeOutOfRange { field: String, value: f64 },

    /// Longitude outside [-180, 180]
    #[error("{field}: longitude {value} is out of range (-180 to 180)")]
    LongitudeOutOfRange { field: String, value: f64 },

    /// Transport mode not present in the registry
    #[error("Unknown transport mode: {0}")]
    UnknownMode(String),

    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),
}

impl ValidationError {
    /// Create a missing location error for the given field
    pub fn missing_location(field: impl Into<String>) -> Self {
        Self::MissingLocation {
            field: field.into(),
        }
    }

    /// Stable machine-readable code for API responses
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingLocation { .. } => "missing_location",
            Self::IncompleteCoordinates { .. } => "incomplete_coordinates",
            Self::LatitudeOutOfRange { .. } | Self::LongitudeOutOfRange { .. } => {
                "invalid_coordinates"
            },
            Self::UnknownMode(_) => "unknown_mode",
            Self::InvalidEmailAddress(_) => "invalid_email",
        }
    }
}
