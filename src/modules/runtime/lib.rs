//! Runtime server for the BFHL service
//!
//! This crate provides the HTTP server, request classification and execution,
//! the AI answer providers, and the request handlers.

pub mod executor;
pub mod handlers;
pub mod providers;
pub mod server;
pub mod state;

pub use executor::{OperationExecutor, RequestClassifier};
pub use handlers::{BfhlHandler, FallbackHandler, HealthHandler};
pub use providers::{AnswerProvider, GeminiProvider, OpenAiProvider, ProviderChain};
pub use server::Runtime;
pub use state::AppState;
