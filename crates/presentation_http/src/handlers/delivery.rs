//! Delivery estimate handlers

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use domain::{DeliveryEstimate, LocationInput, TransportMode};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use super::ApiResponse;
use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Body of `POST /calculate`
///
/// Absent locations deserialize as empty and are reported by the
/// calculator as `missing_location`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CalculateRequest {
    #[serde(default)]
    pub origin: LocationInput,
    #[serde(default)]
    pub destination: LocationInput,
    #[serde(default)]
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    pub mode: String,
}

/// Body of `POST /calculate-all`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CalculateAllRequest {
    #[serde(default)]
    pub origin: LocationInput,
    #[serde(default)]
    pub destination: LocationInput,
}

/// Estimate delivery for one transport mode
#[instrument(skip(state, request), fields(mode = %request.mode))]
pub async fn calculate(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CalculateRequest>,
) -> Result<Json<ApiResponse<DeliveryEstimate>>, ApiError> {
    let estimate = state
        .delivery_service
        .calculate(&request.origin, &request.destination, &request.mode)
        .await?;

    Ok(Json(ApiResponse::ok(estimate)))
}

/// Estimate delivery for every transport mode from one distance lookup
#[instrument(skip_all)]
pub async fn calculate_all(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CalculateAllRequest>,
) -> Result<Json<ApiResponse<BTreeMap<TransportMode, DeliveryEstimate>>>, ApiError> {
    let estimates = state
        .delivery_service
        .calculate_all(&request.origin, &request.destination)
        .await?;

    Ok(Json(ApiResponse::ok(estimates)))
}
