//! Type definitions for the BFHL service
//!
//! This crate contains the wire-level types shared across the workspace:
//! AI provider identities, the provider preference, and the response envelope.

pub mod provider;
pub mod runtime;

pub use provider::{Provider, ProviderPreference};
pub use runtime::ApiResponse;
