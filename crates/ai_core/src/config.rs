//! Configuration for inference engine

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for the inference engine
#[derive(Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the Messages API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `x-api-key`; requests fail fast without one
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Default model to use
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Value of the `anthropic-version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_model() -> String {
    "claude-3-haiku-20240307".to_string()
}

const fn default_timeout_ms() -> u64 {
    20_000 // 20 seconds
}

const fn default_max_tokens() -> u32 {
    256
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            default_model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            api_version: default_api_version(),
        }
    }
}

impl fmt::Debug for InferenceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("default_model", &self.default_model)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_tokens", &self.max_tokens)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl InferenceConfig {
    /// Whether a non-blank API key is present
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("timeout_ms must be greater than 0".to_string());
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        if self.default_model.trim().is_empty() {
            return Err("default_model must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "https://api.anthropic.com");
        assert_eq!(config.default_model, "claude-3-haiku-20240307");
        assert_eq!(config.timeout_ms, 20_000);
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.api_version, "2023-06-01");
        assert!(!config.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let config: InferenceConfig = serde_json::from_str(r#"{"api_key": "sk-test"}"#).unwrap();
        assert!(config.has_api_key());
        assert_eq!(config.base_url, "https://api.anthropic.com");
    }

    #[test]
    fn api_key_is_redacted_and_not_serialized() {
        let config = InferenceConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-secret"));

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
    }

    #[test]
    fn validation_rejects_zero_values() {
        let config = InferenceConfig {
            max_tokens: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = InferenceConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
