//! Normalization of an origin/destination pair

use domain::{Location, LocationInput, ValidationError};

/// Validate both ends of a route
///
/// The origin is checked first; the first failure is returned.
///
/// # Errors
///
/// Returns the `ValidationError` of the first invalid input.
pub fn normalize_route(
    origin: &LocationInput,
    destination: &LocationInput,
) -> Result<(Location, Location), ValidationError> {
    let origin = origin.normalize("origin")?;
    let destination = destination.normalize("destination")?;
    Ok((origin, destination))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_valid() {
        let (o, d) = normalize_route(
            &LocationInput::address("Berlin"),
            &LocationInput::coordinates(38.72, -9.14),
        )
        .unwrap();
        assert_eq!(o, Location::Address("Berlin".to_string()));
        assert!(matches!(d, Location::Coordinates(_)));
    }

    #[test]
    fn origin_error_reported_first() {
        let err = normalize_route(&LocationInput::default(), &LocationInput::default()).unwrap_err();
        assert_eq!(err, ValidationError::missing_location("origin"));
    }

    #[test]
    fn destination_error_names_field() {
        let err = normalize_route(
            &LocationInput::address("Berlin"),
            &LocationInput::coordinates(0.0, 200.0),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("destination:"));
    }
}
