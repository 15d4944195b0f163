//! HTTP server for the BFHL service

use axum::{
    routing::{get, post},
    Router,
};
use bfhl_core::{AppConfig, BfhlError, REQUEST_TIMEOUT_SECS};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::executor::OperationExecutor;
use crate::handlers::{panic_response, BfhlHandler, FallbackHandler, HealthHandler};
use crate::providers::ProviderChain;
use crate::state::AppState;

/// Upper bound on a whole request; the config validator keeps every provider
/// attempt inside it
const REQUEST_TIMEOUT: Duration = Duration::from_secs(REQUEST_TIMEOUT_SECS);

/// Runtime server for the BFHL service
pub struct Runtime {
    config: Arc<AppConfig>,
    executor: Arc<OperationExecutor>,
}

impl Runtime {
    /// Create a new runtime from a validated configuration
    pub fn new(config: AppConfig) -> Result<Self, BfhlError> {
        Self::with_port_override(config, None)
    }

    /// Create a new runtime with an optional port override
    pub fn with_port_override(
        config: AppConfig,
        port_override: Option<u16>,
    ) -> Result<Self, BfhlError> {
        let config = match port_override {
            Some(port) => config.with_port(port),
            None => config,
        };

        let chain = Arc::new(ProviderChain::from_config(&config.ai)?);
        let executor = Arc::new(OperationExecutor::new(chain));

        Ok(Self {
            config: Arc::new(config),
            executor,
        })
    }

    /// Shared handler state for this runtime
    pub fn state(&self) -> AppState {
        AppState::new(self.config.clone(), self.executor.clone())
    }

    /// Build the Axum router
    pub fn build_router(state: AppState) -> Router {
        let email = state.config.official_email.clone();

        // CORS configuration
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        // Request timeout
        let timeout = TimeoutLayer::new(REQUEST_TIMEOUT);

        Router::new()
            .route(
                "/bfhl",
                post(BfhlHandler::handle).fallback(FallbackHandler::not_found),
            )
            .route(
                "/health",
                get(HealthHandler::handle).fallback(FallbackHandler::not_found),
            )
            .fallback(FallbackHandler::not_found)
            // State
            .with_state(state)
            // Middleware
            .layer(CatchPanicLayer::custom(
                move |panic: Box<dyn std::any::Any + Send + 'static>| panic_response(&email, panic),
            ))
            .layer(cors)
            .layer(timeout)
            .layer(TraceLayer::new_for_http())
    }

    /// Start the server
    pub async fn run(&self) -> Result<(), BfhlError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let app = Self::build_router(self.state());

        info!("Starting BFHL server on http://{}", addr);
        info!("Official email: {}", self.config.official_email);
        info!("AI provider preference: {}", self.executor.chain().preference());

        let configured = self.executor.chain().configured();
        if configured.is_empty() {
            warn!("No AI provider configured; AI requests will fail");
        } else {
            info!(
                "AI providers: {}",
                configured
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| BfhlError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .map_err(|e| BfhlError::Server(format!("Server error: {}", e)))?;

        info!("Server stopped");
        Ok(())
    }

    /// Wait for shutdown signal
    async fn shutdown_signal() {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                warn!("Failed to listen for CTRL+C: {}", e);
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                }
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                debug!("Received CTRL+C, shutting down...");
            }
            _ = terminate => {
                debug!("Received SIGTERM, shutting down...");
            }
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the executor
    pub fn executor(&self) -> &OperationExecutor {
        &self.executor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfhl_types::Provider;

    #[test]
    fn test_runtime_creation() {
        let runtime = Runtime::new(AppConfig::default());
        assert!(runtime.is_ok());
    }

    #[test]
    fn test_runtime_with_port_override() {
        let runtime = Runtime::with_port_override(AppConfig::default(), Some(3000)).unwrap();
        assert_eq!(runtime.config().port, 3000);
    }

    #[test]
    fn test_port_override_none_keeps_config() {
        let config = AppConfig::default().with_port(8080);
        let runtime = Runtime::with_port_override(config, None).unwrap();
        assert_eq!(runtime.config().port, 8080);
    }

    #[test]
    fn test_runtime_builds_configured_chain() {
        let mut config = AppConfig::default();
        config.ai.openai = config.ai.openai.with_api_key("sk-test");
        let runtime = Runtime::new(config).unwrap();
        assert_eq!(
            runtime.executor().chain().configured(),
            vec![Provider::Openai]
        );
    }
}
