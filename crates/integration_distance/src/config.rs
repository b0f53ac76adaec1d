//! Distance Matrix client configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the Google Distance Matrix API
#[derive(Clone, Serialize, Deserialize)]
pub struct DistanceMatrixConfig {
    /// Base URL of the Maps platform
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key; requests fail fast without one
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Unit system for the human-readable text (`metric` or `imperial`)
    #[serde(default = "default_units")]
    pub units: String,

    /// Travel mode sent to the API (`driving`, `walking`, `bicycling`, `transit`)
    #[serde(default = "default_travel_mode")]
    pub travel_mode: String,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_travel_mode() -> String {
    "walking".to_string()
}

impl Default for DistanceMatrixConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            units: default_units(),
            travel_mode: default_travel_mode(),
        }
    }
}

impl fmt::Debug for DistanceMatrixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceMatrixConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("units", &self.units)
            .field("travel_mode", &self.travel_mode)
            .finish()
    }
}

impl DistanceMatrixConfig {
    /// Whether a non-blank API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// A missing key is not a configuration error; it only disables the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if !matches!(self.units.as_str(), "metric" | "imperial") {
            return Err(format!("units must be 'metric' or 'imperial', got '{}'", self.units));
        }

        Ok(())
    }
}
