use std::env;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub default_quiz_title: String,
    pub default_subject: String,
    pub fallback_question_count: usize,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            default_quiz_title: env::var("DEFAULT_QUIZ_TITLE")
                .unwrap_or_else(|_| "Hybrid Quiz".to_string()),
            default_subject: env::var("DEFAULT_SUBJECT")
                .unwrap_or_else(|_| "General".to_string()),
            fallback_question_count: env::var("FALLBACK_QUESTION_COUNT")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(5),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.fallback_question_count == 0 {
            return Err(AppError::ValidationError(
                "FALLBACK_QUESTION_COUNT must be at least 1".to_string(),
            ));
        }

        if self.default_quiz_title.trim().is_empty() || self.default_subject.trim().is_empty() {
            return Err(AppError::ValidationError(
                "DEFAULT_QUIZ_TITLE and DEFAULT_SUBJECT cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            default_quiz_title: "Hybrid Quiz".to_string(),
            default_subject: "General".to_string(),
            fallback_question_count: 5,
            cors_allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}
