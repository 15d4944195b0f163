//! AI provider identities and selection preference

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// External text-generation services that can answer an `AI` request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Google Gemini (`generateContent` API)
    Gemini,
    /// OpenAI (`chat/completions` API)
    Openai,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Gemini => write!(f, "gemini"),
            Provider::Openai => write!(f, "openai"),
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::Openai),
            _ => Err(format!("Unknown AI provider: {}", s)),
        }
    }
}

impl Provider {
    /// Providers in fallback priority order
    pub fn all() -> &'static [Provider] {
        &[Provider::Gemini, Provider::Openai]
    }

    /// Name used in user-facing error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::Openai => "OpenAI",
        }
    }

    /// Environment variable holding this provider's API key
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::Openai => "OPENAI_API_KEY",
        }
    }
}

/// Which provider(s) to use for `AI` requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderPreference {
    /// Try every configured provider in priority order
    #[default]
    Auto,
    /// Use exactly this provider, never fall back
    Pinned(Provider),
}

impl fmt::Display for ProviderPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderPreference::Auto => write!(f, "auto"),
            ProviderPreference::Pinned(provider) => write!(f, "{}", provider),
        }
    }
}

impl FromStr for ProviderPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "auto" {
            return Ok(ProviderPreference::Auto);
        }
        normalized
            .parse::<Provider>()
            .map(ProviderPreference::Pinned)
            .map_err(|_| format!("Unknown AI provider preference: {}", s))
    }
}

impl ProviderPreference {
    /// Parse a preference, treating anything unrecognized as `auto`
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}
