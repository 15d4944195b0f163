//! Error types for the BFHL service

use bfhl_types::Provider;
use thiserror::Error;

/// Normalized failure categories shared by every AI provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// The provider has no API key
    NotConfigured,
    /// Upstream answered 429
    RateLimited,
    /// Upstream answered with another 4xx/5xx status
    Upstream { status: u16 },
    /// Network failure, timeout, or no status at all
    RequestFailed,
    /// Upstream answered but no word could be extracted
    EmptyAnswer,
}

/// Failure of a single AI provider attempt
///
/// `detail` holds diagnostic text for the server log and is never shown to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub provider: Provider,
    pub kind: ProviderErrorKind,
    pub detail: Option<String>,
}

impl ProviderError {
    pub fn new(provider: Provider, kind: ProviderErrorKind) -> Self {
        Self {
            provider,
            kind,
            detail: None,
        }
    }

    pub fn not_configured(provider: Provider) -> Self {
        Self::new(provider, ProviderErrorKind::NotConfigured)
    }

    pub fn request_failed(provider: Provider) -> Self {
        Self::new(provider, ProviderErrorKind::RequestFailed)
    }

    pub fn empty_answer(provider: Provider) -> Self {
        Self::new(provider, ProviderErrorKind::EmptyAnswer)
    }

    /// Normalize an upstream HTTP status into an error kind
    ///
    /// 429 is a rate limit, any other 4xx/5xx an upstream API error, and a
    /// missing (or non-error) status a generic request failure.
    pub fn from_status(provider: Provider, status: Option<u16>) -> Self {
        let kind = match status {
            Some(429) => ProviderErrorKind::RateLimited,
            Some(status) if status >= 400 => ProviderErrorKind::Upstream { status },
            _ => ProviderErrorKind::RequestFailed,
        };
        Self::new(provider, kind)
    }

    /// Attach diagnostic text for logging
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Status code returned by the upstream service, if it answered
    pub fn upstream_status(&self) -> Option<u16> {
        match self.kind {
            ProviderErrorKind::RateLimited => Some(429),
            ProviderErrorKind::Upstream { status } => Some(status),
            _ => None,
        }
    }

    /// User-facing message, attributed to the provider
    pub fn message(&self) -> String {
        let name = self.provider.display_name();
        match self.kind {
            ProviderErrorKind::NotConfigured => format!(
                "{} is not configured ({} is missing)",
                name,
                self.provider.api_key_var()
            ),
            ProviderErrorKind::RateLimited => format!("{} rate limit or quota exceeded", name),
            ProviderErrorKind::Upstream { status } => format!("{} API error ({})", name, status),
            ProviderErrorKind::RequestFailed => format!("{} API request failed", name),
            ProviderErrorKind::EmptyAnswer => {
                format!("Unable to extract single-word answer from {} response", name)
            }
        }
    }

    /// HTTP status to report to the caller
    pub fn status_code(&self) -> u16 {
        match self.kind {
            ProviderErrorKind::RateLimited => 429,
            _ => 502,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ProviderError {}

/// Main error type for BFHL operations
#[derive(Error, Debug)]
pub enum BfhlError {
    /// Request content type is not JSON
    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    /// Request body could not be decoded as JSON
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    /// Request shape validation error
    #[error("{0}")]
    Validation(String),

    /// Neither AI provider has an API key
    #[error("No AI provider configured. Set GEMINI_API_KEY or OPENAI_API_KEY.")]
    NoProviderConfigured,

    /// An AI provider attempt failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// Internal error, e.g. a caught handler panic
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BfhlError {
    /// Returns true if this error should be logged at error level
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            BfhlError::Server(_) | BfhlError::Internal(_)
        )
    }

    /// Returns true if this error is a client error (4xx other than rate limiting)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BfhlError::UnsupportedMediaType | BfhlError::InvalidJson(_) | BfhlError::Validation(_)
        )
    }

    /// Returns the appropriate HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            BfhlError::UnsupportedMediaType => 415,
            BfhlError::InvalidJson(_) | BfhlError::Validation(_) => 400,
            BfhlError::NoProviderConfigured => 502,
            BfhlError::Provider(e) => e.status_code(),
            _ => 500,
        }
    }

    /// Sanitize the error message to avoid leaking internal details
    pub fn sanitized_message(&self) -> String {
        match self {
            BfhlError::UnsupportedMediaType
            | BfhlError::Validation(_)
            | BfhlError::NoProviderConfigured
            | BfhlError::Provider(_) => self.to_string(),

            // serde_json positions are not useful to callers
            BfhlError::InvalidJson(_) => "Invalid JSON body".to_string(),

            _ => "Internal server error".to_string(),
        }
    }
}

/// Result type alias using BfhlError
pub type Result<T> = std::result::Result<T, BfhlError>;
