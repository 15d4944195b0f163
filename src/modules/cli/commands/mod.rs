//! CLI commands

mod ask;
mod check;
mod completion;
mod run;

pub use ask::AskCommand;
pub use check::CheckCommand;
pub use completion::CompletionCommand;
pub use run::RunCommand;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// BFHL - numeric operations and one-word AI answers over HTTP
#[derive(Parser, Debug)]
#[command(name = "bfhl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dotenv file to load before reading the environment
    ///
    /// Without this flag a `.env` in the working directory is loaded when
    /// present. A file named here must exist.
    #[arg(short = 'e', long = "env-file", global = true)]
    pub env_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the BFHL server
    Run(RunCommand),

    /// Validate the configuration and print a summary
    Check(CheckCommand),

    /// Ask the configured AI providers a question
    Ask(AskCommand),

    /// Generate shell completion scripts
    #[command(hide = true)]
    Completion(CompletionCommand),
}
