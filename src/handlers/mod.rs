pub mod quiz_handler;

pub use quiz_handler::{fallback_quiz, generate_quiz, health_check, hybrid_quiz, normalize_quiz};

use actix_web::web;

use crate::errors::AppError;

const JSON_BODY_LIMIT: usize = 4 * 1024 * 1024;

/// Registers every route the service exposes. Malformed JSON bodies are
/// reported as validation errors.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into());

    cfg.app_data(json_config)
        .service(health_check)
        .service(normalize_quiz)
        .service(generate_quiz)
        .service(fallback_quiz)
        .service(hybrid_quiz);
}
