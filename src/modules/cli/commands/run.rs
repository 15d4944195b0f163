//! Run command implementation

use bfhl_core::BfhlError;
use bfhl_parser::load_config;
use bfhl_runtime::Runtime;
use clap::Args;
use std::path::Path;
use tracing::info;

/// Run command arguments
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Override server port (takes precedence over PORT)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,
}

impl RunCommand {
    /// Execute the run command
    pub async fn execute(&self, env_file: Option<&Path>) -> Result<(), BfhlError> {
        match env_file {
            Some(path) => info!("Loading environment from: {}", path.display()),
            None => info!("Loading configuration from the environment"),
        }

        let config = load_config(env_file)?;

        let runtime = Runtime::with_port_override(config, self.port)?;
        runtime.run().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_args() {
        let cmd = RunCommand { port: Some(8080) };
        assert_eq!(cmd.port, Some(8080));
    }

    #[tokio::test]
    async fn test_missing_env_file_fails() {
        let cmd = RunCommand { port: None };
        let err = cmd
            .execute(Some(Path::new("/nonexistent/bfhl-test.env")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load env file"));
    }
}
