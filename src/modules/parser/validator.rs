//! Configuration validation

use bfhl_core::{AppConfig, BfhlError, ProviderSettings, REQUEST_TIMEOUT_SECS};
use bfhl_types::Provider;
use once_cell::sync::Lazy;
use regex::Regex;

/// Loose email shape: something, one `@`, something with a dot
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// http(s) scheme and host, optional port and path
static BASE_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[A-Za-z0-9.\-\[\]:]+(/\S*)?$").unwrap());

/// Configuration validator
pub struct ConfigValidator {
    /// Whether the operator email must look like an address
    strict_email: bool,
}

impl ConfigValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self { strict_email: true }
    }

    /// Create a validator that accepts any non-empty operator identity
    pub fn lenient() -> Self {
        Self {
            strict_email: false,
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self, config: &AppConfig) -> Result<(), BfhlError> {
        self.validate_email(&config.official_email)?;

        if config.port == 0 {
            return Err(BfhlError::Config(
                "PORT must be between 1 and 65535".to_string(),
            ));
        }

        if config.ai.timeout_secs == 0 {
            return Err(BfhlError::Config(
                "AI_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        if config.ai.worst_case_secs() >= REQUEST_TIMEOUT_SECS {
            return Err(BfhlError::Config(format!(
                "AI_TIMEOUT_SECS of {} is too large: trying every provider must finish within the {}s request timeout",
                config.ai.timeout_secs, REQUEST_TIMEOUT_SECS
            )));
        }

        for provider in Provider::all() {
            self.validate_provider(*provider, config.ai.settings(*provider))?;
        }

        Ok(())
    }

    fn validate_email(&self, email: &str) -> Result<(), BfhlError> {
        if email.is_empty() {
            return Err(BfhlError::Config(
                "OFFICIAL_EMAIL cannot be empty".to_string(),
            ));
        }

        if self.strict_email && !EMAIL_PATTERN.is_match(email) {
            return Err(BfhlError::Config(format!(
                "Invalid OFFICIAL_EMAIL '{}': expected an email address",
                email
            )));
        }

        Ok(())
    }

    fn validate_provider(
        &self,
        provider: Provider,
        settings: &ProviderSettings,
    ) -> Result<(), BfhlError> {
        let name = provider.display_name();

        if settings.model.is_empty() || settings.model.contains(char::is_whitespace) {
            return Err(BfhlError::Config(format!(
                "Invalid {} model '{}'",
                name, settings.model
            )));
        }

        if !BASE_URL_PATTERN.is_match(&settings.base_url) {
            return Err(BfhlError::Config(format!(
                "Invalid {} base URL '{}': expected http(s)://host[:port]",
                name, settings.base_url
            )));
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
