//! Google Distance Matrix client
//!
//! Sends one `GET /maps/api/distancematrix/json` per lookup with a single
//! origin and a single destination, and reads the first element.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::DistanceMatrixConfig;
use crate::error::DistanceMatrixError;
use crate::models::RouteDistance;

const MATRIX_PATH: &str = "/maps/api/distancematrix/json";

/// Trait for distance matrix clients
#[async_trait]
pub trait DistanceMatrixClient: Send + Sync {
    /// Look up the distance from `origin` to `destination`
    ///
    /// Both values are passed through verbatim: free-text addresses or
    /// `lat,lng` pairs.
    async fn route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteDistance, DistanceMatrixError>;

    /// Whether a usable API key is configured
    fn has_api_key(&self) -> bool;
}

/// Distance Matrix client backed by the Google Maps platform
#[derive(Debug)]
pub struct GoogleDistanceMatrixClient {
    client: Client,
    config: DistanceMatrixConfig,
}

impl GoogleDistanceMatrixClient {
    /// Create a new Distance Matrix client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &DistanceMatrixConfig) -> Result<Self, DistanceMatrixError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("Wayfarer/0.1")
            .build()
            .map_err(|e| DistanceMatrixError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Interpret a Distance Matrix response body
    fn parse_response(body: &str) -> Result<RouteDistance, DistanceMatrixError> {
        let raw: RawMatrixResponse = serde_json::from_str(body)
            .map_err(|e| DistanceMatrixError::ParseError(e.to_string()))?;

        match raw.status.as_str() {
            "OK" => {},
            "REQUEST_DENIED" => {
                return Err(DistanceMatrixError::Unauthorized(
                    raw.error_message
                        .unwrap_or_else(|| "REQUEST_DENIED".to_string()),
                ));
            },
            _ => {
                return Err(DistanceMatrixError::ApiStatus {
                    status: raw.status,
                    message: raw.error_message,
                });
            },
        }

        let element = raw
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| {
                DistanceMatrixError::ParseError("response contains no elements".to_string())
            })?;

        match element.status.as_str() {
            "OK" => {},
            "ZERO_RESULTS" | "NOT_FOUND" | "MAX_ROUTE_LENGTH_EXCEEDED" => {
                return Err(DistanceMatrixError::NoRoute {
                    status: element.status,
                });
            },
            _ => {
                return Err(DistanceMatrixError::ApiStatus {
                    status: element.status,
                    message: None,
                });
            },
        }

        let distance = element.distance.ok_or_else(|| {
            DistanceMatrixError::ParseError("element has no distance".to_string())
        })?;

        Ok(RouteDistance {
            meters: distance.value,
            text: distance.text,
            duration_seconds: element.duration.map(|d| d.value),
        })
    }
}

#[async_trait]
impl DistanceMatrixClient for GoogleDistanceMatrixClient {
    #[instrument(skip(self))]
    async fn route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteDistance, DistanceMatrixError> {
        let Some(api_key) = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
        else {
            return Err(DistanceMatrixError::MissingApiKey);
        };

        let url = format!("{}{MATRIX_PATH}", self.config.base_url.trim_end_matches('/'));
        let params = [
            ("origins", origin),
            ("destinations", destination),
            ("units", self.config.units.as_str()),
            ("mode", self.config.travel_mode.as_str()),
            ("key", api_key),
        ];

        debug!(?url, mode = %self.config.travel_mode, "Requesting distance matrix");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DistanceMatrixError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    DistanceMatrixError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DistanceMatrixError::Unauthorized(format!("HTTP {status}")));
        }
        if !status.is_success() {
            warn!(%status, "Distance Matrix request failed");
            return Err(DistanceMatrixError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                DistanceMatrixError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                DistanceMatrixError::ParseError(e.to_string())
            }
        })?;

        let route = Self::parse_response(&body)?;
        debug!(meters = route.meters, text = %route.text, "Distance resolved");
        Ok(route)
    }

    fn has_api_key(&self) -> bool {
        self.config.has_api_key()
    }
}

// Raw API response types

#[derive(Debug, Deserialize)]
struct RawMatrixResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<RawRow>,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    elements: Vec<RawElement>,
}

#[derive(Debug, Deserialize)]
struct RawElement {
    status: String,
    distance: Option<RawValue>,
    duration: Option<RawValue>,
}

#[derive(Debug, Deserialize)]
struct RawValue {
    value: f64,
    #[serde(default)]
    text: String,
}
