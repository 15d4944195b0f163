//! Configuration parsing for the BFHL service
//!
//! This crate reads the service configuration from environment variables
//! (optionally seeded from a `.env` file) and validates it.

pub mod env;
pub mod validator;

pub use env::{load_dotenv, EnvLoader};
pub use validator::ConfigValidator;

use bfhl_core::{AppConfig, BfhlError};
use std::path::Path;

/// Load and validate configuration from the process environment
///
/// `env_file` names a dotenv file that must exist; without it a `.env` in the
/// working directory is used when present.
pub fn load_config(env_file: Option<&Path>) -> Result<AppConfig, BfhlError> {
    load_dotenv(env_file)?;

    let config = EnvLoader::from_process().load()?;

    let validator = ConfigValidator::new();
    validator.validate(&config)?;

    Ok(config)
}

/// Parse and validate configuration from an arbitrary variable lookup
pub fn parse_vars<F>(lookup: F) -> Result<AppConfig, BfhlError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = EnvLoader::with_lookup(lookup).load()?;
    ConfigValidator::new().validate(&config)?;
    Ok(config)
}
