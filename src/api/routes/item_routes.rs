use axum::{routing::post, Router};

use crate::api::controller::item::ItemController;

pub fn item_routes() -> Router {
    Router::new().route("/items", post(ItemController::create_item))
}
