//! BFHL CLI
//!
//! This crate provides the command-line interface for the BFHL service including:
//! - run: Start the server
//! - check: Validate and summarize the configuration
//! - ask: Ask the AI providers a one-word question

pub mod commands;

pub use commands::{Cli, Commands, LogFormat};
