//! Ask command implementation

use bfhl_core::BfhlError;
use bfhl_parser::load_config;
use bfhl_runtime::Runtime;
use clap::Args;
use serde_json::json;
use std::path::Path;
use tracing::debug;

/// Ask command arguments
#[derive(Args, Debug)]
pub struct AskCommand {
    /// Question to answer; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

impl AskCommand {
    /// The question as sent to the providers
    pub fn question(&self) -> String {
        self.words.join(" ")
    }

    /// Execute the ask command
    ///
    /// Uses the same validation and provider fallback as `POST /bfhl`.
    pub async fn execute(&self, env_file: Option<&Path>) -> Result<(), BfhlError> {
        let config = load_config(env_file)?;
        let runtime = Runtime::new(config)?;

        debug!("Asking: {}", self.question());
        let answer = runtime
            .executor()
            .execute(&json!({ "AI": self.question() }))
            .await?;

        match answer.as_str() {
            Some(word) => println!("{}", word),
            None => println!("{}", answer),
        }

        Ok(())
    }
}
