//! HTTP middleware components
//!
//! Request extraction with validation; tracing, CORS and body limits come
//! from `tower-http` and are applied in the server binary.

pub mod validation;

pub use validation::ValidatedJson;
