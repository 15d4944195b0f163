//! Typed request operations

use std::fmt;

/// The five request kinds accepted by `POST /bfhl`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Fibonacci,
    Prime,
    Lcm,
    Hcf,
    Ai,
}

impl OperationKind {
    /// All recognized kinds, in the order they are listed to callers
    pub fn all() -> &'static [OperationKind] {
        &[
            OperationKind::Fibonacci,
            OperationKind::Prime,
            OperationKind::Lcm,
            OperationKind::Hcf,
            OperationKind::Ai,
        ]
    }

    /// JSON key that selects this operation (case-sensitive)
    pub fn key(&self) -> &'static str {
        match self {
            OperationKind::Fibonacci => "fibonacci",
            OperationKind::Prime => "prime",
            OperationKind::Lcm => "lcm",
            OperationKind::Hcf => "hcf",
            OperationKind::Ai => "AI",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A validated request, carrying its key-specific payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Number of sequence terms, within [1, 50]
    Fibonacci(i64),
    /// Numbers to filter down to primes
    Prime(Vec<i64>),
    /// Numbers to reduce by least common multiple
    Lcm(Vec<i64>),
    /// Numbers to reduce by greatest common divisor
    Hcf(Vec<i64>),
    /// Trimmed natural-language question
    Ai(String),
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Fibonacci(_) => OperationKind::Fibonacci,
            Operation::Prime(_) => OperationKind::Prime,
            Operation::Lcm(_) => OperationKind::Lcm,
            Operation::Hcf(_) => OperationKind::Hcf,
            Operation::Ai(_) => OperationKind::Ai,
        }
    }
}
