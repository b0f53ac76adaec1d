//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `providers`: routing service, generative estimator and calculator
//!
//! Values are layered: built-in defaults, then an optional `config.toml`,
//! then `WAYFARER__SECTION__KEY` environment variables. Credentials missing
//! after that are read from `GOOGLE_MAPS_API_KEY` and `ANTHROPIC_API_KEY`.

mod providers;
mod server;

use std::path::Path;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use providers::{DeliveryAppConfig, DistanceAppConfig, EstimateAppConfig};
pub use server::{LogFormat, ServerConfig};

/// Environment variable consulted when `distance.api_key` is unset
pub const DISTANCE_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variable consulted when `estimate.api_key` is unset
pub const ESTIMATE_KEY_ENV: &str = "ANTHROPIC_API_KEY";

const ENV_PREFIX: &str = "WAYFARER";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Primary distance provider
    #[serde(default)]
    pub distance: DistanceAppConfig,

    /// Generative fallback estimator
    #[serde(default)]
    pub estimate: EstimateAppConfig,

    /// Delivery calculator
    #[serde(default)]
    pub delivery: DeliveryAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file, still honoring the environment
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .add_source(file)
            // Override with environment variables (e.g., WAYFARER__SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_allowed_origins"),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_credential_fallbacks(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Fill unset credentials from the well-known variables
    ///
    /// Keys set through the config layers are never overridden.
    pub fn apply_credential_fallbacks<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .map(SecretString::from)
        };

        if !self.distance.has_api_key() {
            if let Some(key) = read(DISTANCE_KEY_ENV) {
                debug!(var = DISTANCE_KEY_ENV, "Using distance API key from environment");
                self.distance.api_key = Some(key);
            }
        }

        if !self.estimate.has_api_key() {
            if let Some(key) = read(ESTIMATE_KEY_ENV) {
                debug!(var = ESTIMATE_KEY_ENV, "Using estimate API key from environment");
                self.estimate.api_key = Some(key);
            }
        }
    }

    /// Validate every section
    ///
    /// Missing credentials are not an error; they only disable a provider.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.distance
            .to_client_config()
            .validate()
            .map_err(|e| format!("distance.{e}"))?;
        self.estimate
            .to_inference_config()
            .validate()
            .map_err(|e| format!("estimate.{e}"))?;
        if self.delivery.attempt_timeout_secs == 0 {
            return Err("delivery.attempt_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
