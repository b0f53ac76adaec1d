//! Wayfarer HTTP presentation layer
//!
//! This crate provides the HTTP API for the delivery estimator.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::ValidatedJson;
pub use routes::create_router;
pub use state::AppState;
