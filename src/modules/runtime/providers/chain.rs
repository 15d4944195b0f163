//! Provider selection and fallback

use bfhl_core::{AiConfig, BfhlError, ProviderError};
use bfhl_types::{Provider, ProviderPreference};
use std::sync::Arc;
use tracing::{debug, warn};

use super::gemini::GeminiProvider;
use super::openai::OpenAiProvider;
use super::traits::AnswerProvider;

/// Ordered set of answer providers plus the operator's preference
///
/// With a pinned preference only that provider is consulted. With `auto`
/// every configured provider is tried in priority order until one answers.
pub struct ProviderChain {
    preference: ProviderPreference,
    providers: Vec<Arc<dyn AnswerProvider>>,
}

impl ProviderChain {
    /// Create a chain from already-built providers, kept in the given order
    pub fn new(preference: ProviderPreference, providers: Vec<Arc<dyn AnswerProvider>>) -> Self {
        Self {
            preference,
            providers,
        }
    }

    /// Build the HTTP-backed providers described by the AI configuration
    pub fn from_config(config: &AiConfig) -> Result<Self, BfhlError> {
        let timeout = config.timeout();
        let mut providers: Vec<Arc<dyn AnswerProvider>> = Vec::new();

        for provider in Provider::all() {
            let settings = config.settings(*provider).clone();
            match provider {
                Provider::Gemini => providers.push(Arc::new(GeminiProvider::new(settings, timeout)?)),
                Provider::Openai => providers.push(Arc::new(OpenAiProvider::new(settings, timeout)?)),
            }
        }

        Ok(Self::new(config.preference, providers))
    }

    pub fn preference(&self) -> ProviderPreference {
        self.preference
    }

    /// Providers holding an API key, in priority order
    pub fn configured(&self) -> Vec<Provider> {
        self.providers
            .iter()
            .filter(|p| p.is_configured())
            .map(|p| p.provider())
            .collect()
    }

    fn find(&self, provider: Provider) -> Option<&Arc<dyn AnswerProvider>> {
        self.providers.iter().find(|p| p.provider() == provider)
    }

    /// Answer a question with a single word
    pub async fn answer(&self, question: &str) -> Result<String, BfhlError> {
        match self.preference {
            ProviderPreference::Pinned(provider) => {
                let adapter = self
                    .find(provider)
                    .filter(|p| p.is_configured())
                    .ok_or_else(|| ProviderError::not_configured(provider))?;
                debug!(provider = %provider, "Asking pinned provider");
                Ok(adapter.answer_single_word(question).await?)
            }
            ProviderPreference::Auto => self.answer_with_fallback(question).await,
        }
    }

    async fn answer_with_fallback(&self, question: &str) -> Result<String, BfhlError> {
        let mut last_error: Option<ProviderError> = None;

        for adapter in self.providers.iter().filter(|p| p.is_configured()) {
            let provider = adapter.provider();
            debug!(provider = %provider, "Asking provider");

            match adapter.answer_single_word(question).await {
                Ok(word) => return Ok(word),
                Err(e) => {
                    warn!(
                        provider = %provider,
                        status = ?e.upstream_status(),
                        detail = e.detail.as_deref().unwrap_or(""),
                        "Provider failed: {}",
                        e
                    );
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => Err(e.into()),
            None => Err(BfhlError::NoProviderConfigured),
        }
    }
}
