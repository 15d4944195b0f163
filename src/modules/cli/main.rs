//! BFHL CLI
//!
//! Command-line interface for the BFHL numeric and one-word AI answer service.

use bfhl_cli::{Cli, Commands, LogFormat};
use bfhl_core::BfhlError;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), BfhlError> {
    let cli = Cli::parse();
    let env_file = cli.env_file.clone();

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let fmt_layer = match cli.log_format {
        LogFormat::Text => fmt::layer().boxed(),
        LogFormat::Json => fmt::layer().json().boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Run(cmd) => {
            cmd.execute(env_file.as_deref()).await?;
        }
        Commands::Check(cmd) => {
            cmd.execute(env_file.as_deref())?;
        }
        Commands::Ask(cmd) => {
            cmd.execute(env_file.as_deref()).await?;
        }
        Commands::Completion(cmd) => {
            cmd.execute();
        }
    }

    Ok(())
}
