use axum::{routing::get, Router};

use crate::api::controller::greeting::GreetingController;

pub fn greeting_routes() -> Router {
    Router::new()
        .route("/", get(GreetingController::hello))
        .route("/health", get(GreetingController::health))
        .route("/greet/{name}", get(GreetingController::greet))
}
