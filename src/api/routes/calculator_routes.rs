use axum::{routing::get, Router};

use crate::api::controller::calculator::CalculatorController;

pub fn calculator_routes() -> Router {
    Router::new().route("/calculate", get(CalculatorController::calculate))
}
