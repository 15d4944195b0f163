//! Process-wide service configuration
//!
//! Built once at startup and shared read-only afterwards.

use bfhl_types::{Provider, ProviderPreference};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_OFFICIAL_EMAIL: &str = "operator@example.com";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 8;

/// Upper bound on a whole HTTP request, in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Root service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Operator identity echoed in every response
    pub official_email: String,

    /// Port to listen on
    pub port: u16,

    /// AI provider settings
    pub ai: AiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            official_email: DEFAULT_OFFICIAL_EMAIL.to_string(),
            port: DEFAULT_PORT,
            ai: AiConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// AI subsystem configuration
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Fixed provider or `auto`
    pub preference: ProviderPreference,

    /// Per-request timeout for outbound provider calls, in seconds
    pub timeout_secs: u64,

    pub gemini: ProviderSettings,

    pub openai: ProviderSettings,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            preference: ProviderPreference::Auto,
            timeout_secs: DEFAULT_AI_TIMEOUT_SECS,
            gemini: ProviderSettings::new(DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_BASE_URL),
            openai: ProviderSettings::new(DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_BASE_URL),
        }
    }
}

impl AiConfig {
    /// Settings for one provider
    pub fn settings(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::Gemini => &self.gemini,
            Provider::Openai => &self.openai,
        }
    }

    /// Providers that have an API key, in priority order
    pub fn configured_providers(&self) -> Vec<Provider> {
        Provider::all()
            .iter()
            .copied()
            .filter(|p| self.settings(*p).is_configured())
            .collect()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Longest an `AI` request can spend upstream when every provider is tried
    pub fn worst_case_secs(&self) -> u64 {
        self.timeout_secs
            .saturating_mul(Provider::all().len() as u64)
    }
}

/// Connection settings for one AI provider
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// API key; `None` makes the provider unavailable
    pub api_key: Option<String>,

    /// Model identifier sent upstream
    pub model: String,

    /// Scheme and host of the provider API, without a trailing slash
    pub base_url: String,
}

impl ProviderSettings {
    pub fn new(model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: None,
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns true if a non-empty API key is present
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

// Keys must never reach logs
impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}
