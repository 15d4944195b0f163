//! Environment variable configuration loading

use bfhl_core::{
    AiConfig, AppConfig, BfhlError, ProviderSettings, DEFAULT_AI_TIMEOUT_SECS,
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_OFFICIAL_EMAIL,
    DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, DEFAULT_PORT,
};
use bfhl_types::{Provider, ProviderPreference};
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

pub const OFFICIAL_EMAIL_VAR: &str = "OFFICIAL_EMAIL";
pub const PORT_VAR: &str = "PORT";
pub const AI_PROVIDER_VAR: &str = "AI_PROVIDER";
pub const AI_TIMEOUT_VAR: &str = "AI_TIMEOUT_SECS";
pub const GEMINI_MODEL_VAR: &str = "GEMINI_MODEL";
pub const GEMINI_BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const OPENAI_MODEL_VAR: &str = "OPENAI_MODEL";
pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Load a `.env` file into the process environment
///
/// With an explicit path the file must exist. Without one, a `.env` in the
/// working directory (or a parent) is loaded if present and ignored otherwise.
pub fn load_dotenv(path: Option<&Path>) -> Result<(), BfhlError> {
    match path {
        Some(path) => dotenvy::from_path(path).map_err(|e| {
            BfhlError::Config(format!(
                "Failed to load env file '{}': {}",
                path.display(),
                e
            ))
        }),
        None => {
            let _ = dotenvy::dotenv();
            Ok(())
        }
    }
}

fn process_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Builds an [`AppConfig`] from environment variables
///
/// Variables are read through a lookup function so the same logic serves the
/// process environment and in-memory maps. Empty values count as unset.
pub struct EnvLoader<F> {
    lookup: F,
}

impl EnvLoader<fn(&str) -> Option<String>> {
    /// Loader backed by the process environment
    pub fn from_process() -> Self {
        Self {
            lookup: process_var,
        }
    }
}

impl<F> EnvLoader<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn with_lookup(lookup: F) -> Self {
        Self { lookup }
    }

    fn var(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_var<T>(&self, name: &str, default: T) -> Result<T, BfhlError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.var(name) {
            Some(raw) => raw
                .parse()
                .map_err(|e| BfhlError::Config(format!("Invalid {} '{}': {}", name, raw, e))),
            None => Ok(default),
        }
    }

    fn preference(&self) -> ProviderPreference {
        let Some(raw) = self.var(AI_PROVIDER_VAR) else {
            return ProviderPreference::Auto;
        };

        let preference = ProviderPreference::parse_lenient(&raw);
        if preference == ProviderPreference::Auto && !raw.eq_ignore_ascii_case("auto") {
            warn!(
                "Unrecognized {} '{}', falling back to auto provider selection",
                AI_PROVIDER_VAR, raw
            );
        }
        preference
    }

    fn provider_settings(
        &self,
        provider: Provider,
        model_var: &str,
        default_model: &str,
        base_url_var: &str,
        default_base_url: &str,
    ) -> ProviderSettings {
        ProviderSettings {
            api_key: self.var(provider.api_key_var()),
            model: self
                .var(model_var)
                .unwrap_or_else(|| default_model.to_string()),
            base_url: self
                .var(base_url_var)
                .unwrap_or_else(|| default_base_url.to_string()),
        }
    }

    /// Read every supported variable and build the configuration
    pub fn load(&self) -> Result<AppConfig, BfhlError> {
        let official_email = match self.var(OFFICIAL_EMAIL_VAR) {
            Some(email) => email,
            None => {
                warn!(
                    "{} is not set, responses will report '{}'",
                    OFFICIAL_EMAIL_VAR, DEFAULT_OFFICIAL_EMAIL
                );
                DEFAULT_OFFICIAL_EMAIL.to_string()
            }
        };

        let ai = AiConfig {
            preference: self.preference(),
            timeout_secs: self.parse_var(AI_TIMEOUT_VAR, DEFAULT_AI_TIMEOUT_SECS)?,
            gemini: self.provider_settings(
                Provider::Gemini,
                GEMINI_MODEL_VAR,
                DEFAULT_GEMINI_MODEL,
                GEMINI_BASE_URL_VAR,
                DEFAULT_GEMINI_BASE_URL,
            ),
            openai: self.provider_settings(
                Provider::Openai,
                OPENAI_MODEL_VAR,
                DEFAULT_OPENAI_MODEL,
                OPENAI_BASE_URL_VAR,
                DEFAULT_OPENAI_BASE_URL,
            ),
        };

        Ok(AppConfig {
            official_email,
            port: self.parse_var(PORT_VAR, DEFAULT_PORT)?,
            ai,
        })
    }
}
