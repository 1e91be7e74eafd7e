pub mod operation;
pub mod service;
