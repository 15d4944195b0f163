//! HTTP request handlers for the BFHL server
//!
//! This module contains the operation endpoint, the health check, and the
//! envelope-shaped fallbacks for unknown routes and panics.

mod bfhl;
mod fallback;
mod health;

pub use bfhl::BfhlHandler;
pub use fallback::{panic_response, FallbackHandler};
pub use health::HealthHandler;

use axum::{http::StatusCode, Json};
use bfhl_core::BfhlError;
use bfhl_types::ApiResponse;
use tracing::{error, info, warn};

/// Convert an error into the enveloped HTTP response, logging it by class
pub(crate) fn error_response(
    official_email: &str,
    err: &BfhlError,
) -> (StatusCode, Json<ApiResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if err.is_error() {
        error!(status = status.as_u16(), "Request failed: {}", err);
    } else if err.is_client_error() {
        info!(status = status.as_u16(), "Rejected request: {}", err);
    } else {
        warn!(status = status.as_u16(), "AI request failed: {}", err);
    }

    (
        status,
        Json(ApiResponse::error(official_email, err.sanitized_message())),
    )
}
