//! Infrastructure adapters
//!
//! Adapters connect application ports to the HTTP clients.

mod fallback_estimate_adapter;
mod location_guess_adapter;
mod primary_distance_adapter;

pub use fallback_estimate_adapter::FallbackEstimateAdapter;
pub use location_guess_adapter::LocationGuessAdapter;
pub use primary_distance_adapter::PrimaryDistanceAdapter;
