//! Google Gemini provider

use async_trait::async_trait;
use bfhl_core::{BfhlError, ProviderError, ProviderSettings};
use bfhl_types::Provider;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::answer::extract_single_word;
use super::client::{build_client, send_json};
use super::traits::AnswerProvider;

// ============================================================================
// Gemini API types
// ============================================================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

// ============================================================================
// Provider
// ============================================================================

/// Gemini `generateContent` adapter
///
/// The one-word instruction and the question travel together as a single
/// prompt; the key is sent in the `x-goog-api-key` header.
pub struct GeminiProvider {
    client: reqwest::Client,
    settings: ProviderSettings,
}

impl GeminiProvider {
    pub fn new(settings: ProviderSettings, timeout: Duration) -> Result<Self, BfhlError> {
        Ok(Self {
            client: build_client(Provider::Gemini, timeout)?,
            settings,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url(),
            self.settings.model
        )
    }

    fn build_prompt(question: &str) -> String {
        format!(
            "Answer the following question in exactly one word.\nQuestion: {}",
            question
        )
    }

    /// `candidates[0].content.parts[0].text`, or empty when absent
    fn extract_text(body: &Value) -> &str {
        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

#[async_trait]
impl AnswerProvider for GeminiProvider {
    async fn answer_single_word(&self, question: &str) -> Result<String, ProviderError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ProviderError::not_configured(Provider::Gemini))?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::build_prompt(question),
                }],
            }],
        };

        let body = send_json(
            Provider::Gemini,
            self.client
                .post(self.endpoint())
                .header("x-goog-api-key", api_key)
                .json(&request),
        )
        .await?;

        let text = Self::extract_text(&body);
        extract_single_word(text).ok_or_else(|| {
            ProviderError::empty_answer(Provider::Gemini).with_detail(format!("raw answer: {:?}", text))
        })
    }

    fn is_configured(&self) -> bool {
        self.settings.is_configured()
    }

    fn provider(&self) -> Provider {
        Provider::Gemini
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfhl_core::ProviderErrorKind;
    use httpmock::prelude::*;
    use serde_json::json;

    const QUESTION: &str = "What is the capital of France?";

    fn provider_for(server: &MockServer, api_key: Option<&str>) -> GeminiProvider {
        let mut settings = ProviderSettings::new("gemini-2.5-flash", server.base_url());
        settings.api_key = api_key.map(str::to_string);
        GeminiProvider::new(settings, Duration::from_secs(2)).unwrap()
    }

    fn candidate(text: &str) -> Value {
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ], "role": "model" } }
            ]
        })
    }

    #[tokio::test]
    async fn test_sends_combined_prompt_and_extracts_word() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1beta/models/gemini-2.5-flash:generateContent")
                    .header("x-goog-api-key", "g-test")
                    .json_body(json!({
                        "contents": [{
                            "parts": [{
                                "text": "Answer the following question in exactly one word.\nQuestion: What is the capital of France?"
                            }]
                        }]
                    }));
                then.status(200).json_body(candidate("Paris.\n"));
            })
            .await;

        let provider = provider_for(&server, Some("g-test"));
        let answer = provider.answer_single_word(QUESTION).await.unwrap();

        mock.assert_async().await;
        assert_eq!(answer, "Paris");
    }

    #[tokio::test]
    async fn test_missing_key_sends_nothing() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(candidate("Paris"));
            })
            .await;

        let provider = provider_for(&server, None);
        assert!(!provider.is_configured());

        let err = provider.answer_single_word(QUESTION).await.unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::NotConfigured);
        assert_eq!(err.provider, Provider::Gemini);
        mock.assert_calls_async(0).await;
    }

    #[tokio::test]
    async fn test_rate_limit_is_normalized() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(429)
                    .json_body(json!({ "error": { "code": 429, "status": "RESOURCE_EXHAUSTED" } }));
            })
            .await;

        let err = provider_for(&server, Some("g-test"))
            .answer_single_word(QUESTION)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::RateLimited);
        assert_eq!(err.to_string(), "Gemini rate limit or quota exceeded");
    }

    #[tokio::test]
    async fn test_server_error_carries_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(503).body("unavailable");
            })
            .await;

        let err = provider_for(&server, Some("g-test"))
            .answer_single_word(QUESTION)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::Upstream { status: 503 });
        assert_eq!(err.upstream_status(), Some(503));
        assert_eq!(err.detail.as_deref(), Some("unavailable"));
    }

    #[tokio::test]
    async fn test_missing_candidates_is_empty_answer() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200)
                    .json_body(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
            })
            .await;

        let err = provider_for(&server, Some("g-test"))
            .answer_single_word(QUESTION)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::EmptyAnswer);
    }

    #[tokio::test]
    async fn test_timeout_is_request_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200)
                    .delay(Duration::from_millis(800))
                    .json_body(candidate("Paris"));
            })
            .await;

        let mut settings = ProviderSettings::new("gemini-2.5-flash", server.base_url());
        settings.api_key = Some("g-test".to_string());
        let provider = GeminiProvider::new(settings, Duration::from_millis(100)).unwrap();

        let err = provider.answer_single_word(QUESTION).await.unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::RequestFailed);
        assert_eq!(err.to_string(), "Gemini API request failed");
    }

    #[tokio::test]
    async fn test_api_key_stays_out_of_error_detail() {
        let mut settings = ProviderSettings::new("gemini-2.5-flash", "http://127.0.0.1:1");
        settings.api_key = Some("SECRET-KEY-123".to_string());
        let provider = GeminiProvider::new(settings, Duration::from_secs(2)).unwrap();

        let err = provider.answer_single_word(QUESTION).await.unwrap_err();
        assert_eq!(err.kind, ProviderErrorKind::RequestFailed);
        let detail = err.detail.clone().unwrap_or_default();
        assert!(!detail.contains("SECRET-KEY-123"), "detail: {}", detail);
        assert!(!err.to_string().contains("SECRET-KEY-123"));
    }

    #[test]
    fn test_extract_text_path() {
        assert_eq!(GeminiProvider::extract_text(&candidate("Blue")), "Blue");
        assert_eq!(GeminiProvider::extract_text(&json!({ "candidates": [] })), "");
        assert_eq!(GeminiProvider::extract_text(&Value::Null), "");
    }
}
