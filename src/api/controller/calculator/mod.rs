//! Calculator controller: connects `/calculate` to the arithmetic service

use axum::Json;
use tracing::debug;

use crate::api::dto::calculator_dto::{CalculateQuery, CalculateResponse};
use crate::api::util::extract::AppQuery;
use crate::domain::calculator::service;

pub struct CalculatorController;

impl CalculatorController {
    pub async fn calculate(AppQuery(query): AppQuery<CalculateQuery>) -> Json<CalculateResponse> {
        let response = match service::calculate(query.num1, query.num2, &query.operation) {
            Ok(calculation) => CalculateResponse::Computed(calculation),
            Err(err) => {
                debug!(operation = err.operation(), "calculate rejected: {err}");
                CalculateResponse::Rejected {
                    error: err.to_string(),
                }
            }
        };
        Json(response)
    }
}
