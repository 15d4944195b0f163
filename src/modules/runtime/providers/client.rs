//! Shared outbound HTTP plumbing for provider adapters

use bfhl_core::{BfhlError, ProviderError};
use bfhl_types::Provider;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Longest upstream error body kept for the log
const MAX_DETAIL_LEN: usize = 512;

/// Build an HTTP client whose every request is bounded by `timeout`
pub(crate) fn build_client(provider: Provider, timeout: Duration) -> Result<reqwest::Client, BfhlError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| {
            BfhlError::Server(format!(
                "Failed to build HTTP client for {}: {}",
                provider.display_name(),
                e
            ))
        })
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(MAX_DETAIL_LEN) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Send a request and decode the JSON response body
///
/// Non-2xx statuses and transport failures (including timeouts) are normalized
/// through [`ProviderError::from_status`]; transport errors are stripped of the
/// request URL before being kept as detail. A successful response whose body is
/// not JSON decodes to `Value::Null`, leaving field extraction to find nothing.
pub(crate) async fn send_json(
    provider: Provider,
    request: reqwest::RequestBuilder,
) -> Result<Value, ProviderError> {
    let response = request.send().await.map_err(|e| {
        // The URL may carry credentials, so it never reaches the detail
        let e = e.without_url();
        let detail = if e.is_timeout() {
            format!("request timed out: {}", e)
        } else {
            e.to_string()
        };
        ProviderError::from_status(provider, e.status().map(|s| s.as_u16())).with_detail(detail)
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::from_status(provider, Some(status.as_u16()))
            .with_detail(truncate(&body).to_string()));
    }

    let body = response.text().await.map_err(|e| {
        ProviderError::request_failed(provider).with_detail(format!("failed to read body: {}", e))
    })?;

    debug!(
        provider = %provider,
        status = status.as_u16(),
        bytes = body.len(),
        "Provider responded"
    );

    Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
}
