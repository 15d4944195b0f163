//! Envelope-shaped responses for unknown routes and panics

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bfhl_core::BfhlError;
use bfhl_types::ApiResponse;
use std::any::Any;

use super::error_response;
use crate::state::AppState;

/// Handler for anything the router does not serve
pub struct FallbackHandler;

impl FallbackHandler {
    /// Unknown path, or a known path with the wrong method
    pub async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
        (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(state.official_email(), "Not found")),
        )
    }
}

/// Render a caught handler panic as the 500 envelope
pub fn panic_response(official_email: &str, panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    let err = BfhlError::Internal(format!("handler panicked: {}", detail));
    error_response(official_email, &err).into_response()
}
