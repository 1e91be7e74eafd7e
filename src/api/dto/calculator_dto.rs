//! Calculator API DTOs

use serde::{Deserialize, Serialize};

use crate::domain::calculator::service::Calculation;

#[derive(Deserialize, Debug)]
pub struct CalculateQuery {
    pub num1: i64,
    pub num2: i64,
    #[serde(default = "default_operation")]
    pub operation: String,
}

fn default_operation() -> String {
    "add".to_string()
}

/// Unsupported operations still answer 200, carrying only an `error` field.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum CalculateResponse {
    Computed(Calculation),
    Rejected { error: String },
}
