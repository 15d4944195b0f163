//! Health check handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use bfhl_types::ApiResponse;

use crate::state::AppState;

/// Handler for liveness probes
pub struct HealthHandler;

impl HealthHandler {
    /// Handle GET /health
    pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
        (
            StatusCode::OK,
            Json(ApiResponse::healthy(state.official_email())),
        )
    }
}
