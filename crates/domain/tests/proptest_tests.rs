//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{DeliveryTime, EmailAddress, GeoLocation, LocationInput, TransportMode};
use proptest::prelude::*;

// ============================================================================
// GeoLocation Property Tests
// ============================================================================

mod geo_location_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_create_location(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let result = GeoLocation::new(lat, lon);
            prop_assert!(result.is_ok());

            let loc = result.unwrap();
            prop_assert!((loc.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((loc.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn describe_has_six_decimals(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let loc = GeoLocation::new(lat, lon).unwrap();
            let text = loc.describe();
            prop_assert!(text.starts_with("latitude "));
            prop_assert!(text.contains(", longitude "));
        }
    }
}

// ============================================================================
// LocationInput Property Tests
// ============================================================================

mod location_input_tests {
    use super::*;

    proptest! {
        #[test]
        fn non_blank_address_always_normalizes(address in "[A-Za-z][A-Za-z ,]{0,40}") {
            let loc = LocationInput::address(address.clone()).normalize("origin");
            prop_assert!(loc.is_ok());
            prop_assert_eq!(loc.unwrap().to_query_value(), address.trim());
        }

        #[test]
        fn out_of_range_coordinates_never_fall_back_to_address(
            lat in 90.01f64..1000.0f64,
            address in "[A-Za-z]{1,20}"
        ) {
            let input = LocationInput {
                address: Some(address),
                lat: Some(lat),
                lng: Some(0.0),
            };
            prop_assert!(input.normalize("origin").is_err());
        }
    }
}

// ============================================================================
// DeliveryTime Property Tests
// ============================================================================

mod delivery_time_tests {
    use super::*;

    proptest! {
        #[test]
        fn strictly_increasing_in_distance(
            d1 in 0.0f64..1.0e8,
            delta in 1.0f64..1.0e6,
            speed in 0.5f64..200.0
        ) {
            let shorter = DeliveryTime::from_distance(d1, speed);
            let longer = DeliveryTime::from_distance(d1 + delta, speed);
            prop_assert!(longer.seconds() > shorter.seconds());
        }

        #[test]
        fn strictly_decreasing_in_speed(
            distance in 1.0f64..1.0e8,
            s1 in 0.5f64..100.0,
            delta in 0.5f64..100.0
        ) {
            let slow = DeliveryTime::from_distance(distance, s1);
            let fast = DeliveryTime::from_distance(distance, s1 + delta);
            prop_assert!(fast.seconds() < slow.seconds());
        }

        #[test]
        fn formatting_is_deterministic(distance in 0.0f64..1.0e9, speed in 0.5f64..200.0) {
            let a = DeliveryTime::from_distance(distance, speed);
            let b = DeliveryTime::from_distance(distance, speed);
            prop_assert_eq!(a.format_text(), b.format_text());
        }

        #[test]
        fn text_matches_one_of_four_shapes(seconds in 0u64..100_000_000) {
            let t = DeliveryTime::from_distance(seconds as f64 / 3.6, 1.0);
            let text = t.format_text();
            prop_assert!(
                text == "<1 minute"
                    || text.ends_with(" minutes")
                    || text.ends_with(" hours")
            );
        }
    }
}

// ============================================================================
// TransportMode / EmailAddress Property Tests
// ============================================================================

mod transport_mode_tests {
    use super::*;

    proptest! {
        #[test]
        fn unknown_names_are_rejected(name in "[a-z]{1,12}") {
            prop_assume!(TransportMode::ALL.iter().all(|m| m.as_str() != name));
            prop_assert!(name.parse::<TransportMode>().is_err());
        }
    }

    #[test]
    fn every_mode_parses_from_its_name() {
        for mode in TransportMode::ALL {
            assert_eq!(mode.as_str().parse::<TransportMode>(), Ok(mode));
        }
    }
}

mod email_address_tests {
    use super::*;

    proptest! {
        #[test]
        fn strings_without_at_are_rejected(s in "[a-zA-Z0-9.]+") {
            prop_assert!(EmailAddress::new(&s).is_err());
        }

        #[test]
        fn domain_is_lowercase(input in "[A-Za-z]{1,8}@[A-Za-z]{1,8}\\.[a-z]{2,3}") {
            if let Ok(email) = EmailAddress::new(&input) {
                prop_assert_eq!(email.domain(), email.domain().to_lowercase());
            }
        }
    }
}
