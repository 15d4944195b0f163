//! OpenAI chat completions provider

use async_trait::async_trait;
use bfhl_core::{BfhlError, ProviderError, ProviderSettings};
use bfhl_types::Provider;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::answer::extract_single_word;
use super::client::{build_client, send_json};
use super::traits::AnswerProvider;

const SYSTEM_PROMPT: &str = "Answer in exactly one word.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// OpenAI `chat/completions` adapter
///
/// Sends the instruction as a system message and the question as the user
/// message, with temperature pinned to 0.
pub struct OpenAiProvider {
    client: reqwest::Client,
    settings: ProviderSettings,
}

impl OpenAiProvider {
    pub fn new(settings: ProviderSettings, timeout: Duration) -> Result<Self, BfhlError> {
        Ok(Self {
            client: build_client(Provider::Openai, timeout)?,
            settings,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.settings.base_url())
    }

    /// `choices[0].message.content`, or empty when absent
    fn extract_text(body: &Value) -> &str {
        body.pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

#[async_trait]
impl AnswerProvider for OpenAiProvider {
    async fn answer_single_word(&self, question: &str) -> Result<String, ProviderError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ProviderError::not_configured(Provider::Openai))?;

        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: question,
                },
            ],
            temperature: 0.0,
        };

        let body = send_json(
            Provider::Openai,
            self.client
                .post(self.endpoint())
                .bearer_auth(api_key)
                .json(&request),
        )
        .await?;

        let text = Self::extract_text(&body);
        extract_single_word(text).ok_or_else(|| {
            ProviderError::empty_answer(Provider::Openai).with_detail(format!("raw answer: {:?}", text))
        })
    }

    fn is_configured(&self) -> bool {
        self.settings.is_configured()
    }

    fn provider(&self) -> Provider {
        Provider::Openai
    }
}
