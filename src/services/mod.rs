pub mod painting_service;

pub use painting_service::*;
