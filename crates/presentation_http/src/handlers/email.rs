//! Email-domain location handler

use application::EmailLocation;
use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;
use validator::Validate;

use super::ApiResponse;
use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Body of `POST /locate-email`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LocateEmailRequest {
    #[serde(default)]
    #[validate(length(max = 254, message = "must be at most 254 characters"))]
    pub email: String,
}

/// Guess a location for the domain of an email address
#[instrument(skip_all)]
pub async fn locate_email(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LocateEmailRequest>,
) -> Result<Json<ApiResponse<EmailLocation>>, ApiError> {
    let location = state.email_service.locate(&request.email).await?;
    Ok(Json(ApiResponse::ok(location)))
}
