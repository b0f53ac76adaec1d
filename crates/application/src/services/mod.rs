//! Application services
//!
//! Services orchestrate domain objects and ports.

mod delivery_service;
mod email_location_service;
mod location_normalizer;
mod mode_registry;

pub use delivery_service::{
    DEFAULT_ATTEMPT_TIMEOUT_SECS, DeliveryService, ProviderState, ProviderStatus,
    ResolvedDistance,
};
pub use email_location_service::{
    EmailLocation, EmailLocationService, LocationSource, WHIMSICAL_LOCATIONS,
};
pub use location_normalizer::normalize_route;
pub use mode_registry::ModeRegistry;
