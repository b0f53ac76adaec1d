//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    #[serde(rename = "lat")]
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    #[serde(rename = "lng")]
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidCoordinates {
    /// Latitude outside [-90, 90] (or NaN)
    Latitude(f64),
    /// Longitude outside [-180, 180] (or NaN)
    Longitude(f64),
}

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude(v) => write!(f, "Invalid latitude {v}: must be -90 to 90"),
            Self::Longitude(v) => write!(f, "Invalid longitude {v}: must be -180 to 180"),
        }
    }
}

impl std::error::Error for InvalidCoordinates {}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// NaN never satisfies the range checks and is rejected as well.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinates::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Render as the `lat,lng` pair routing APIs accept
    #[must_use]
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Render as prose for a generative prompt
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "latitude {:.6}, longitude {:.6}",
            self.latitude, self.longitude
        )
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid coordinates");
        assert!((loc.latitude() - 52.52).abs() < f64::EPSILON);
        assert!((loc.longitude() - 13.405).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert_eq!(
            GeoLocation::new(91.0, 0.0),
            Err(InvalidCoordinates::Latitude(91.0))
        );
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert_eq!(
            GeoLocation::new(0.0, 181.0),
            Err(InvalidCoordinates::Longitude(181.0))
        );
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
        assert!(GeoLocation::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_query_value() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid");
        assert_eq!(loc.to_query_value(), "52.52,13.405");
    }

    #[test]
    fn test_describe() {
        let loc = GeoLocation::new(52.52, -13.405).expect("valid");
        assert_eq!(loc.describe(), "latitude 52.520000, longitude -13.405000");
    }

    #[test]
    fn test_serialization_uses_lat_lng() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid");
        let json = serde_json::to_value(loc).expect("serialize");
        assert_eq!(json["lat"], 52.52);
        assert_eq!(json["lng"], 13.405);
    }
}
