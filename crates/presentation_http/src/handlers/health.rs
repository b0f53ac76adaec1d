//! Health check handler

use application::ProviderStatus;
use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub providers: ProviderStatus,
}

/// Liveness plus provider configuration
///
/// Always `200 ok`: an unconfigured provider is reported, not fatal.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        providers: state.delivery_service.provider_status(),
    })
}
