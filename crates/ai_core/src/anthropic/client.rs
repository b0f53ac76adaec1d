//! Anthropic Messages API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};

/// Inference engine backed by the Anthropic Messages API
pub struct AnthropicInferenceEngine {
    client: Client,
    config: InferenceConfig,
}

impl std::fmt::Debug for AnthropicInferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicInferenceEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AnthropicInferenceEngine {
    /// Create a new Anthropic inference engine
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent("Wayfarer/0.1")
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            model = %config.default_model,
            configured = config.has_api_key(),
            "Initialized Anthropic inference engine"
        );

        Ok(Self { client, config })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn map_send_error(&self, err: &reqwest::Error) -> InferenceError {
        if err.is_timeout() {
            InferenceError::Timeout(self.config.timeout_ms)
        } else {
            InferenceError::ConnectionFailed(err.to_string())
        }
    }

    /// Classify a non-success HTTP status
    fn status_error(status: StatusCode, body: &str) -> InferenceError {
        let detail = serde_json::from_str::<MessagesErrorResponse>(body)
            .map(|e| format!("{}: {}", e.error.kind, e.error.message))
            .unwrap_or_else(|_| format!("HTTP {status}"));

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                InferenceError::Unauthorized(detail)
            },
            StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
            s if s.is_server_error() => InferenceError::ServerError(detail),
            _ => InferenceError::RequestFailed(detail),
        }
    }
}

/// Messages API request body
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<MessagesMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct MessagesMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Messages API success body
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    model: String,
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
    #[serde(default)]
    usage: Option<RawUsage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawUsage {
    input_tokens: u32,
    output_tokens: u32,
}

/// Messages API error body
#[derive(Debug, Deserialize)]
struct MessagesErrorResponse {
    error: MessagesErrorDetail,
}

#[derive(Debug, Deserialize)]
struct MessagesErrorDetail {
    #[serde(rename = "type")]
    kind: String,
    message: String,
}

#[async_trait]
impl InferenceEngine for AnthropicInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.config.default_model))]
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        let Some(api_key) = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
        else {
            return Err(InferenceError::MissingApiKey);
        };

        let body = MessagesRequest {
            model: &self.config.default_model,
            max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
            messages: request
                .messages
                .iter()
                .map(|m| MessagesMessage {
                    role: &m.role,
                    content: &m.content,
                })
                .collect(),
        };

        debug!("Sending request to Messages API");

        let response = self
            .client
            .post(self.api_url("messages"))
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.config.api_version)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        if !status.is_success() {
            warn!(status = %status, "Inference request failed");
            return Err(Self::status_error(status, &text));
        }

        let parsed: MessagesResponse = serde_json::from_str(&text)
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let content = parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .map(|t| t.trim().to_string())
            .ok_or_else(|| {
                InferenceError::InvalidResponse("response has no text content block".to_string())
            })?;

        let usage = parsed.usage.map(|u| TokenUsage {
            input_tokens: u.input_tokens,
            output_tokens: u.output_tokens,
        });

        debug!(tokens = ?usage, "Inference completed");

        Ok(InferenceResponse {
            content,
            model: parsed.model,
            usage,
            finish_reason: parsed.stop_reason,
        })
    }

    fn has_api_key(&self) -> bool {
        self.config.has_api_key()
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AnthropicInferenceEngine {
        AnthropicInferenceEngine::new(InferenceConfig::default()).unwrap()
    }

    #[test]
    fn api_url_joins_cleanly() {
        let engine = AnthropicInferenceEngine::new(InferenceConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..InferenceConfig::default()
        })
        .unwrap();
        assert_eq!(engine.api_url("/messages"), "http://localhost:8080/v1/messages");
    }

    #[test]
    fn status_classification() {
        let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;
        assert!(matches!(
            AnthropicInferenceEngine::status_error(StatusCode::UNAUTHORIZED, body),
            InferenceError::Unauthorized(ref m) if m.contains("authentication_error")
        ));
        assert!(matches!(
            AnthropicInferenceEngine::status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            InferenceError::RateLimited
        ));
        assert!(matches!(
            AnthropicInferenceEngine::status_error(StatusCode::from_u16(529).unwrap(), ""),
            InferenceError::ServerError(_)
        ));
        assert!(matches!(
            AnthropicInferenceEngine::status_error(StatusCode::BAD_REQUEST, "oops"),
            InferenceError::RequestFailed(ref m) if m == "HTTP 400 Bad Request"
        ));
    }

    #[test]
    fn request_body_shape() {
        let body = MessagesRequest {
            model: "m",
            max_tokens: 30,
            messages: vec![MessagesMessage {
                role: "user",
                content: "hello",
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "m",
                "max_tokens": 30,
                "messages": [{"role": "user", "content": "hello"}]
            })
        );
    }

    #[tokio::test]
    async fn missing_key_fails_fast() {
        let err = engine()
            .generate(InferenceRequest::simple("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, InferenceError::MissingApiKey));
    }
}
