pub mod calculator;
pub mod greeting;
pub mod item;
pub mod search;
pub mod user;
