use serde::Serialize;

use super::operation::{CalculateError, Operation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub num1: i64,
    pub num2: i64,
    pub operation: String,
    pub result: i128,
}

pub fn calculate(num1: i64, num2: i64, operation: &str) -> Result<Calculation, CalculateError> {
    let op: Operation = operation.parse()?;
    Ok(Calculation {
        num1,
        num2,
        operation: op.to_string(),
        result: op.apply(num1, num2),
    })
}
