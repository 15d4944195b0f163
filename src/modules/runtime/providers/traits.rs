//! Answer provider trait definition

use async_trait::async_trait;
use bfhl_core::ProviderError;
use bfhl_types::Provider;

/// Trait for external text-generation services
///
/// Every provider answers a question with exactly one word. Implementations own
/// their request construction and response-field extraction, and report failures
/// as normalized [`ProviderError`]s.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Ask `question` and return a single word
    ///
    /// # Errors
    /// `NotConfigured` without an API key (no request is sent), otherwise the
    /// normalized upstream, transport or extraction failure.
    async fn answer_single_word(&self, question: &str) -> Result<String, ProviderError>;

    /// Returns true if the provider has an API key
    fn is_configured(&self) -> bool;

    /// Identity used for ordering and error attribution
    fn provider(&self) -> Provider;
}
