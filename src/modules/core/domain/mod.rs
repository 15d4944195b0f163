//! Domain models for the BFHL service

mod config;
mod operation;

pub use config::{
    AiConfig, AppConfig, ProviderSettings, DEFAULT_AI_TIMEOUT_SECS, DEFAULT_GEMINI_BASE_URL,
    DEFAULT_GEMINI_MODEL, DEFAULT_OFFICIAL_EMAIL, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
    DEFAULT_PORT, REQUEST_TIMEOUT_SECS,
};
pub use operation::{Operation, OperationKind};
