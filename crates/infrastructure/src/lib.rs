//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports over the Distance Matrix client and the
//! Anthropic inference engine, and owns configuration loading and telemetry.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod distance_extraction;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::{BootstrapError, Providers};
pub use config::{AppConfig, LogFormat, ServerConfig};
pub use distance_extraction::{ExtractionError, extract_distance};
pub use telemetry::{TelemetryError, init_telemetry};
