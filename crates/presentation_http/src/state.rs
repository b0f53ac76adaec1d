//! Application state shared across handlers

use std::sync::Arc;

use application::{DeliveryService, EmailLocationService};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Delivery calculator
    pub delivery_service: Arc<DeliveryService>,
    /// Email-domain locator
    pub email_service: Arc<EmailLocationService>,
}
