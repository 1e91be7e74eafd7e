//! Route declarations, one sub-router per controller

pub mod calculator_routes;
pub mod greeting_routes;
pub mod item_routes;
pub mod search_routes;
pub mod user_routes;
