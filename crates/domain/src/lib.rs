//! Domain layer for Wayfarer
//!
//! Contains the ubiquitous language of the delivery estimator: locations,
//! transport modes, distance results, delivery estimates and the pure
//! delivery-time arithmetic. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::ValidationError;
pub use value_objects::*;
