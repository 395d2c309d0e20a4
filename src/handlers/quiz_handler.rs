use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{
            question_count, FallbackQuizRequest, GenerateQuizRequest, HybridQuizRequest,
            NormalizeQuizRequest,
        },
        response::HealthResponse,
    },
};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}

#[post("/api/quizzes/normalize")]
pub async fn normalize_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<NormalizeQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let request = request.into_inner();
    let kind = request.kind();

    let quiz = state
        .quiz_service
        .normalize(&request.raw, kind, request.subject)
        .inspect_err(|e| {
            log::warn!("[{}] normalize failed: {}", request_label(&req), e);
        })?;

    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/quizzes/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let request = request.into_inner();

    let generated = state.quiz_service.generate_from_model_output(
        &request.model_output,
        request.kind(),
        &request.content,
        question_count(request.question_count),
        request.subject,
    );

    if generated.used_fallback {
        log::info!(
            "[{}] served fallback quiz with {} questions",
            request_label(&req),
            generated.quiz.questions.len()
        );
    }

    Ok(HttpResponse::Ok().json(generated))
}

#[post("/api/quizzes/fallback")]
pub async fn fallback_quiz(
    state: web::Data<AppState>,
    request: web::Json<FallbackQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let request = request.into_inner();

    let quiz = state.quiz_service.fallback(
        &request.content,
        question_count(request.question_count),
        request.subject,
    );

    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/quizzes/hybrid")]
pub async fn hybrid_quiz(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<HybridQuizRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let (pool, counts, options) = request.into_inner().into_parts();
    let pool_size = pool.len();

    let quiz = state.quiz_service.compose_hybrid(pool, counts, options);

    // The composer never fails; an empty result is the caller's failure.
    if quiz.is_empty() {
        log::warn!(
            "[{}] hybrid quiz empty (pool {}, requested {})",
            request_label(&req),
            pool_size,
            counts.total()
        );
        return Err(AppError::EmptyQuiz(format!(
            "pool of {} questions could not supply any of the {} requested",
            pool_size,
            counts.total()
        )));
    }

    Ok(HttpResponse::Ok().json(quiz))
}

fn request_label(req: &HttpRequest) -> String {
    get_request_id(req).unwrap_or_else(|| "-".to_string())
}
