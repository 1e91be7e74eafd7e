//! Path and query DTOs decoded by the controllers.

pub mod calculator_dto;
pub mod search_dto;
pub mod user_dto;
