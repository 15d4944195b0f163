//! Operation endpoint handler

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use bfhl_core::BfhlError;
use bfhl_types::ApiResponse;
use serde_json::Value;
use tracing::{field, info, info_span, Instrument, Span};
use uuid::Uuid;

use super::error_response;
use crate::executor::RequestClassifier;
use crate::state::AppState;

/// Handler for `POST /bfhl`
pub struct BfhlHandler;

impl BfhlHandler {
    /// Handle POST /bfhl
    pub async fn handle(
        State(state): State<AppState>,
        headers: HeaderMap,
        body: Bytes,
    ) -> impl IntoResponse {
        let span = info_span!(
            "bfhl",
            request_id = %Uuid::new_v4(),
            operation = field::Empty
        );

        async move {
            match Self::process(&state, &headers, &body).await {
                Ok(data) => {
                    info!("Request succeeded");
                    (
                        StatusCode::OK,
                        Json(ApiResponse::success(state.official_email(), data)),
                    )
                }
                Err(e) => error_response(state.official_email(), &e),
            }
        }
        .instrument(span)
        .await
    }

    async fn process(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<Value, BfhlError> {
        if !Self::is_json_content_type(headers) {
            return Err(BfhlError::UnsupportedMediaType);
        }

        let payload = Self::decode_body(body)?;
        let operation = RequestClassifier::classify(&payload)?;
        Span::current().record("operation", field::display(operation.kind()));

        state.executor.run(operation).await
    }

    /// Media type essence must be `application/json`; parameters are ignored
    fn is_json_content_type(headers: &HeaderMap) -> bool {
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
    }

    /// An empty body decodes as `{}`
    fn decode_body(body: &[u8]) -> Result<Value, BfhlError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_slice(body).map_err(|e| BfhlError::InvalidJson(e.to_string()))
    }
}
