pub mod quiz_generation;
pub mod quiz_service;
