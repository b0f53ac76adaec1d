//! HTTP request handlers

pub mod delivery;
pub mod email;
pub mod health;
pub mod modes;

use serde::Serialize;

/// Success envelope: `{success: true, data}`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Always `true`
    pub success: bool,
    /// Response payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
