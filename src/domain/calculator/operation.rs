use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculateError {
    #[error("Unsupported operation")]
    UnsupportedOperation(String),
}

impl CalculateError {
    /// The operation name as the caller sent it.
    pub fn operation(&self) -> &str {
        match self {
            CalculateError::UnsupportedOperation(op) => op,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Widened to `i128` so no pair of `i64` operands can overflow.
    pub fn apply(self, lhs: i64, rhs: i64) -> i128 {
        let (lhs, rhs) = (i128::from(lhs), i128::from(rhs));
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }
}

impl FromStr for Operation {
    type Err = CalculateError;

    // Case-sensitive: "Add" is not an operation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            other => Err(CalculateError::UnsupportedOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
