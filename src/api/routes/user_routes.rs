use axum::{routing::get, Router};

use crate::api::controller::user::UserController;

pub fn user_routes() -> Router {
    Router::new().route("/users/{user_id}/posts", get(UserController::list_user_posts))
}
