//! Check command implementation

use bfhl_core::{AppConfig, BfhlError};
use bfhl_parser::load_config;
use bfhl_types::Provider;
use clap::Args;
use std::fmt::Write as _;
use std::path::Path;

/// Check command arguments
#[derive(Args, Debug)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Execute the check command
    ///
    /// Fails with the validation error when the configuration is invalid.
    pub fn execute(&self, env_file: Option<&Path>) -> Result<(), BfhlError> {
        let config = load_config(env_file)?;
        print!("{}", Self::summary(&config));
        Ok(())
    }

    /// Human-readable configuration report; API keys are never printed
    pub fn summary(config: &AppConfig) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Configuration OK");
        let _ = writeln!(out, "  official email : {}", config.official_email);
        let _ = writeln!(out, "  port           : {}", config.port);
        let _ = writeln!(out, "  AI preference  : {}", config.ai.preference);
        let _ = writeln!(out, "  AI timeout     : {}s", config.ai.timeout_secs);

        for provider in Provider::all() {
            let settings = config.ai.settings(*provider);
            let status = if settings.is_configured() {
                "configured"
            } else {
                "missing key"
            };
            let _ = writeln!(
                out,
                "  {:<14} : {} (model {}, {})",
                provider.display_name(),
                status,
                settings.model,
                settings.base_url()
            );
        }

        if config.ai.configured_providers().is_empty() {
            let _ = writeln!(out, "  warning        : AI requests will fail until a key is set");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_redacts_keys() {
        let mut config = AppConfig::default();
        config.ai.gemini = config.ai.gemini.with_api_key("g-super-secret");

        let summary = CheckCommand::summary(&config);
        assert!(summary.contains("Gemini         : configured (model gemini-2.5-flash"));
        assert!(summary.contains("OpenAI         : missing key"));
        assert!(summary.contains("AI preference  : auto"));
        assert!(!summary.contains("g-super-secret"));
        assert!(!summary.contains("warning"));
    }

    #[test]
    fn test_summary_warns_without_providers() {
        let summary = CheckCommand::summary(&AppConfig::default());
        assert!(summary.contains("AI requests will fail"));
    }
}
