//! Shared runtime application state (HTTP handlers)

use bfhl_core::AppConfig;
use std::sync::Arc;

use crate::executor::OperationExecutor;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub executor: Arc<OperationExecutor>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, executor: Arc<OperationExecutor>) -> Self {
        Self { config, executor }
    }

    /// Operator identity echoed in every envelope
    pub fn official_email(&self) -> &str {
        &self.config.official_email
    }
}
