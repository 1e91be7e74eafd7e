//! Greeting controller: static hello/health bodies and the name greeter

use axum::Json;

use crate::api::util::extract::AppPath;
use crate::domain::greeting::service::{self, HealthResponse, MessageResponse};

pub struct GreetingController;

impl GreetingController {
    pub async fn hello() -> Json<MessageResponse> {
        Json(service::hello())
    }

    pub async fn health() -> Json<HealthResponse> {
        Json(service::health())
    }

    pub async fn greet(AppPath(name): AppPath<String>) -> Json<MessageResponse> {
        Json(service::greet(&name))
    }
}
