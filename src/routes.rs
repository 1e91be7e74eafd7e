use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::routes::{
    calculator_routes::calculator_routes, greeting_routes::greeting_routes,
    item_routes::item_routes, search_routes::search_routes, user_routes::user_routes,
};
use crate::errors::AppError;

/// Build the main application router
pub fn app_router() -> Router {
    Router::new()
        .merge(greeting_routes())
        .merge(search_routes())
        .merge(calculator_routes())
        .merge(item_routes())
        .merge(user_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

async fn handler_404() -> AppError {
    AppError::NotFound
}
