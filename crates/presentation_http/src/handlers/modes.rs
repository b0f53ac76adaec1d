//! Transport mode listing

use axum::{Json, extract::State};
use domain::ModeSpec;

use super::ApiResponse;
use crate::state::AppState;

/// List every transport mode in registry order
pub async fn list_modes(State(state): State<AppState>) -> Json<ApiResponse<Vec<ModeSpec>>> {
    Json(ApiResponse::ok(
        state.delivery_service.registry().list_all().to_vec(),
    ))
}
