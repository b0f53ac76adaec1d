//! Registry of supported transport modes

use std::sync::LazyLock;

use domain::{ModeSpec, TransportMode, ValidationError};

static STANDARD: LazyLock<ModeRegistry> = LazyLock::new(ModeRegistry::standard);

/// Immutable table of transport modes and their fixed speeds
#[derive(Debug, Clone)]
pub struct ModeRegistry {
    modes: Vec<ModeSpec>,
}

impl ModeRegistry {
    /// The process-wide registry
    #[must_use]
    pub fn global() -> &'static Self {
        &STANDARD
    }

    /// Build the standard table
    #[must_use]
    pub fn standard() -> Self {
        Self {
            modes: vec![
                ModeSpec::new(
                    TransportMode::Walking,
                    5.0,
                    "A steady stroll, one foot in front of the other",
                ),
                ModeSpec::new(
                    TransportMode::Swimming,
                    3.0,
                    "Front crawl the whole way, parcel held above the waves",
                ),
                ModeSpec::new(
                    TransportMode::Pigeon,
                    80.0,
                    "A homing pigeon with a very small backpack",
                ),
                ModeSpec::new(
                    TransportMode::RockClimbing,
                    1.0,
                    "Scaling every obstacle on the way, rope and chalk included",
                ),
            ],
        }
    }

    /// Look up a mode
    #[must_use]
    pub fn get(&self, mode: TransportMode) -> Option<&ModeSpec> {
        self.modes.iter().find(|spec| spec.mode == mode)
    }

    /// Resolve a mode by its wire name
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownMode` if the name is not registered.
    pub fn resolve(&self, name: &str) -> Result<&ModeSpec, ValidationError> {
        let mode: TransportMode = name.parse()?;
        self.get(mode)
            .ok_or_else(|| ValidationError::UnknownMode(name.to_string()))
    }

    /// All modes in registry order
    #[must_use]
    pub fn list_all(&self) -> &[ModeSpec] {
        &self.modes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_speeds() {
        let registry = ModeRegistry::standard();
        let speeds: Vec<(TransportMode, f64)> = registry
            .list_all()
            .iter()
            .map(|s| (s.mode, s.speed_kmh))
            .collect();
        assert_eq!(
            speeds,
            vec![
                (TransportMode::Walking, 5.0),
                (TransportMode::Swimming, 3.0),
                (TransportMode::Pigeon, 80.0),
                (TransportMode::RockClimbing, 1.0),
            ]
        );
    }

    #[test]
    fn every_mode_is_registered_with_positive_speed() {
        let registry = ModeRegistry::global();
        for mode in TransportMode::ALL {
            let spec = registry.get(mode).unwrap();
            assert!(spec.speed_kmh > 0.0);
            assert!(!spec.description.is_empty());
        }
    }

    #[test]
    fn resolve_by_name() {
        let registry = ModeRegistry::global();
        assert_eq!(registry.resolve("pigeon").unwrap().speed_kmh, 80.0);
        assert_eq!(
            registry.resolve("hovercraft").unwrap_err(),
            ValidationError::UnknownMode("hovercraft".to_string())
        );
    }

    #[test]
    fn list_order_matches_mode_ordering() {
        let registry = ModeRegistry::global();
        let modes: Vec<TransportMode> = registry.list_all().iter().map(|s| s.mode).collect();
        let mut sorted = modes.clone();
        sorted.sort();
        assert_eq!(modes, sorted);
    }
}
