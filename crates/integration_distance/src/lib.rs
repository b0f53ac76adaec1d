//! Road distance integration for Wayfarer
//!
//! Queries the [Google Distance Matrix API](https://developers.google.com/maps/documentation/distance-matrix)
//! for the distance between exactly one origin and one destination.
//!
//! # Architecture
//!
//! [`DistanceMatrixClient`] defines the interface, implemented by
//! [`GoogleDistanceMatrixClient`]. Errors are reported as
//! [`DistanceMatrixError`] and classified by the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_distance::{DistanceMatrixConfig, GoogleDistanceMatrixClient};
//!
//! let config = DistanceMatrixConfig {
//!     api_key: Some("...".into()),
//!     ..DistanceMatrixConfig::default()
//! };
//! let client = GoogleDistanceMatrixClient::new(&config)?;
//! let route = client.route("Berlin, Germany", "52.37,4.89").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DistanceMatrixClient, GoogleDistanceMatrixClient};
pub use config::DistanceMatrixConfig;
pub use error::DistanceMatrixError;
pub use models::RouteDistance;
