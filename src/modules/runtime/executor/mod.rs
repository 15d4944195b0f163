//! Operation execution module
//!
//! Classifies request bodies and dispatches them to the numeric kernel or the
//! AI provider chain.

mod classifier;

pub use classifier::{RequestClassifier, FIBONACCI_RANGE, MAX_ARRAY_LEN};

use bfhl_core::{math, BfhlError, Operation};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use crate::providers::ProviderChain;

/// Executor that turns a request body into its `data` payload
pub struct OperationExecutor {
    chain: Arc<ProviderChain>,
}

impl OperationExecutor {
    /// Create a new operation executor
    pub fn new(chain: Arc<ProviderChain>) -> Self {
        Self { chain }
    }

    /// Classify and run a decoded request body
    pub async fn execute(&self, body: &Value) -> Result<Value, BfhlError> {
        let operation = RequestClassifier::classify(body)?;
        self.run(operation).await
    }

    /// Run an already-classified operation
    pub async fn run(&self, operation: Operation) -> Result<Value, BfhlError> {
        debug!(operation = %operation.kind(), "Running operation");

        match operation {
            Operation::Fibonacci(count) => Ok(json!(math::fibonacci(count))),
            Operation::Prime(values) => {
                let primes: Vec<i64> = values.into_iter().filter(|n| math::is_prime(*n)).collect();
                Ok(json!(primes))
            }
            Operation::Lcm(values) => math::lcm_all(&values)
                .map(|lcm| json!(lcm))
                .ok_or_else(|| BfhlError::Validation("lcm result is too large".to_string())),
            Operation::Hcf(values) => Ok(json!(math::gcd_all(&values))),
            Operation::Ai(question) => {
                let word = self.chain.answer(&question).await?;
                Ok(Value::String(word))
            }
        }
    }

    /// Get the provider chain
    pub fn chain(&self) -> &ProviderChain {
        &self.chain
    }
}
