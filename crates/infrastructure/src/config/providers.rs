//! Provider configuration: routing service, generative estimator, calculator.

use std::fmt;
use std::time::Duration;

use ai_core::InferenceConfig;
use application::DEFAULT_ATTEMPT_TIMEOUT_SECS;
use integration_distance::DistanceMatrixConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

fn is_blank(secret: Option<&SecretString>) -> bool {
    secret.is_none_or(|s| s.expose_secret().trim().is_empty())
}

/// Google Distance Matrix settings
#[derive(Clone, Serialize, Deserialize)]
pub struct DistanceAppConfig {
    /// Base URL of the Maps platform
    #[serde(default = "default_distance_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// HTTP timeout in seconds
    #[serde(default = "default_distance_timeout")]
    pub timeout_secs: u64,

    /// `metric` or `imperial`
    #[serde(default = "default_units")]
    pub units: String,

    /// Travel mode sent to the API
    #[serde(default = "default_travel_mode")]
    pub travel_mode: String,
}

fn default_distance_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_distance_timeout() -> u64 {
    10
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_travel_mode() -> String {
    "walking".to_string()
}

impl Default for DistanceAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_distance_base_url(),
            api_key: None,
            timeout_secs: default_distance_timeout(),
            units: default_units(),
            travel_mode: default_travel_mode(),
        }
    }
}

impl fmt::Debug for DistanceAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("units", &self.units)
            .field("travel_mode", &self.travel_mode)
            .finish()
    }
}

impl DistanceAppConfig {
    /// Whether a non-blank key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !is_blank(self.api_key.as_ref())
    }

    /// Build the client configuration, exposing the key
    #[must_use]
    pub fn to_client_config(&self) -> DistanceMatrixConfig {
        DistanceMatrixConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string()),
            timeout_secs: self.timeout_secs,
            units: self.units.clone(),
            travel_mode: self.travel_mode.clone(),
        }
    }
}

/// Anthropic Messages API settings for the generative estimator
#[derive(Clone, Serialize, Deserialize)]
pub struct EstimateAppConfig {
    /// Base URL of the Messages API
    #[serde(default = "default_estimate_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens per reply
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// HTTP timeout in milliseconds
    #[serde(default = "default_estimate_timeout_ms")]
    pub timeout_ms: u64,

    /// Value of the `anthropic-version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_estimate_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_model() -> String {
    "claude-3-haiku-20240307".to_string()
}

const fn default_max_tokens() -> u32 {
    256
}

const fn default_estimate_timeout_ms() -> u64 {
    20_000
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

impl Default for EstimateAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_estimate_base_url(),
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_ms: default_estimate_timeout_ms(),
            api_version: default_api_version(),
        }
    }
}

impl fmt::Debug for EstimateAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EstimateAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_ms", &self.timeout_ms)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl EstimateAppConfig {
    /// Whether a non-blank key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !is_blank(self.api_key.as_ref())
    }

    /// Build the inference engine configuration, exposing the key
    #[must_use]
    pub fn to_inference_config(&self) -> InferenceConfig {
        InferenceConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string()),
            default_model: self.model.clone(),
            timeout_ms: self.timeout_ms,
            max_tokens: self.max_tokens,
            api_version: self.api_version.clone(),
        }
    }
}

/// Calculator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryAppConfig {
    /// Outer bound on each provider attempt, in seconds
    #[serde(default = "default_attempt_timeout")]
    pub attempt_timeout_secs: u64,
}

const fn default_attempt_timeout() -> u64 {
    DEFAULT_ATTEMPT_TIMEOUT_SECS
}

impl Default for DeliveryAppConfig {
    fn default() -> Self {
        Self {
            attempt_timeout_secs: default_attempt_timeout(),
        }
    }
}

impl DeliveryAppConfig {
    /// Attempt timeout as a [`Duration`]
    #[must_use]
    pub const fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }
}
