//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/modes", get(handlers::modes::list_modes))
        // Delivery estimates
        .route("/calculate", post(handlers::delivery::calculate))
        .route("/calculate-all", post(handlers::delivery::calculate_all))
        // Email-domain location guess
        .route("/locate-email", post(handlers::email::locate_email))
        // Attach state
        .with_state(state)
}
