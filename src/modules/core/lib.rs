//! Core domain logic for the BFHL service
//!
//! This crate contains the configuration model, typed operations, the numeric
//! kernel, and the error types shared by the parser, runtime and CLI.

pub mod domain;
pub mod error;
pub mod math;

pub use domain::*;
pub use error::{BfhlError, ProviderError, ProviderErrorKind, Result};
