//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod distance_port;
mod location_guess_port;

#[cfg(test)]
pub use distance_port::MockDistancePort;
pub use distance_port::{DistancePort, ProviderError, ProviderErrorKind};
#[cfg(test)]
pub use location_guess_port::MockLocationGuessPort;
pub use location_guess_port::LocationGuessPort;
