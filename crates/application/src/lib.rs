//! Application layer - Use cases and orchestration
//!
//! Contains the delivery calculator, the mode registry and the port
//! definitions that the infrastructure layer implements.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
