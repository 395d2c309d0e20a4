use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Recoverable failures while turning model output into questions. Callers
/// are expected to fall back to content-based generation on any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Invalid quiz shape: {0}")]
    InvalidQuizShape(String),

    #[error("No valid questions in model output")]
    NoValidQuestions,

    #[error("Malformed model output: {0}")]
    MalformedModelOutput(String),
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    QuizGeneration(#[from] QuizError),

    #[error("Quiz has no questions: {0}")]
    EmptyQuiz(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::QuizGeneration(QuizError::InvalidQuizShape(_)) => "INVALID_QUIZ_SHAPE",
            AppError::QuizGeneration(QuizError::NoValidQuestions) => "NO_VALID_QUESTIONS",
            AppError::QuizGeneration(QuizError::MalformedModelOutput(_)) => {
                "MALFORMED_MODEL_OUTPUT"
            }
            AppError::EmptyQuiz(_) => "EMPTY_QUIZ",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub error_code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::QuizGeneration(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EmptyQuiz(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            error_code: self.error_code(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type QuizResult<T> = Result<T, QuizError>;
