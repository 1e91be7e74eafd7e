use axum::{routing::get, Router};

use crate::api::controller::search::SearchController;

pub fn search_routes() -> Router {
    Router::new().route("/search", get(SearchController::search))
}
