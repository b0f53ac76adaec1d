//! Location input and its normalized form
//!
//! A location arrives as loose JSON (`address`, `lat`, `lng`, all optional)
//! and is normalized into exactly one representation before any provider
//! sees it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geo_location::{GeoLocation, InvalidCoordinates};
use crate::errors::ValidationError;

/// Raw location as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    /// Free-text address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Latitude in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl LocationInput {
    /// Input carrying only an address
    pub fn address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }

    /// Input carrying only coordinates
    #[must_use]
    pub const fn coordinates(lat: f64, lng: f64) -> Self {
        Self {
            address: None,
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    /// Validate and normalize into a [`Location`]
    ///
    /// Coordinates take precedence over an address when both are present,
    /// since they bypass geocoding. Out-of-range coordinates are rejected
    /// even if an address was also supplied.
    ///
    /// `field` names the input in error messages (e.g. "origin").
    pub fn normalize(&self, field: &str) -> Result<Location, ValidationError> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => GeoLocation::new(lat, lng)
                .map(Location::Coordinates)
                .map_err(|e| match e {
                    InvalidCoordinates::Latitude(value) => ValidationError::LatitudeOutOfRange {
                        field: field.to_string(),
                        value,
                    },
                    InvalidCoordinates::Longitude(value) => {
                        ValidationError::LongitudeOutOfRange {
                            field: field.to_string(),
                            value,
                        }
                    },
                }),
            (lat, lng) => {
                let address = self
                    .address
                    .as_deref()
                    .map(str::trim)
                    .filter(|a| !a.is_empty());
                match address {
                    Some(a) => Ok(Location::Address(a.to_string())),
                    None if lat.is_some() || lng.is_some() => {
                        Err(ValidationError::IncompleteCoordinates {
                            field: field.to_string(),
                        })
                    },
                    None => Err(ValidationError::missing_location(field)),
                }
            },
        }
    }
}

/// A validated location, usable by any distance provider
///
/// Serializes back into the [`LocationInput`] shape so responses echo the
/// form the caller used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationInput", into = "LocationInput")]
pub enum Location {
    /// Free-text address, still to be geocoded by the provider
    Address(String),
    /// Explicit coordinates
    Coordinates(GeoLocation),
}

impl Location {
    /// Value for a routing API `origins`/`destinations` parameter
    #[must_use]
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Address(address) => address.clone(),
            Self::Coordinates(geo) => geo.to_query_value(),
        }
    }

    /// Human description suitable for a generative prompt
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Address(address) => address.clone(),
            Self::Coordinates(geo) => geo.describe(),
        }
    }
}

impl From<Location> for LocationInput {
    fn from(location: Location) -> Self {
        match location {
            Location::Address(address) => Self::address(address),
            Location::Coordinates(geo) => Self::coordinates(geo.latitude(), geo.longitude()),
        }
    }
}

impl TryFrom<LocationInput> for Location {
    type Error = ValidationError;

    fn try_from(input: LocationInput) -> Result<Self, Self::Error> {
        input.normalize("location")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => write!(f, "{address}"),
            Self::Coordinates(geo) => write!(f, "{geo}"),
        }
    }
}
