use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod categories;
pub mod questions;
pub mod quizzes;

/// Canonical short message for each error status.
fn status_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}

/// Uniform JSON error body: `{ success, error, message }`.
pub fn error_response(status: StatusCode) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "success": false,
        "error": status.as_u16(),
        "message": status_message(status),
    }))
}

/// Maps a service failure onto the uniform error body.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    let status = match err {
        ServiceError::BadRequest => StatusCode::BAD_REQUEST,
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status)
}

/// Fallback handler for unknown paths.
pub async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND)
}

/// Fallback handler for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> HttpResponse {
    error_response(StatusCode::METHOD_NOT_ALLOWED)
}

/// JSON extractor configuration producing the uniform 400 body.
pub fn json_error_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        InternalError::from_response(err, error_response(StatusCode::BAD_REQUEST)).into()
    })
}

/// Query extractor configuration producing the uniform 400 body.
pub fn query_error_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        InternalError::from_response(err, error_response(StatusCode::BAD_REQUEST)).into()
    })
}

/// Path extractor configuration; an unparseable id reads as a missing
/// resource rather than a malformed request.
pub fn path_error_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        InternalError::from_response(err, error_response(StatusCode::NOT_FOUND)).into()
    })
}

/// Registers every API resource; each resource carries a method fallback so
/// that a wrong verb on a known path yields 405 instead of 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/categories")
            .route(web::get().to(categories::list_categories))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/categories/{category_id}/questions")
            .route(web::get().to(categories::list_category_questions))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/questions")
            .route(web::get().to(questions::list_questions))
            .route(web::post().to(questions::create_or_search_questions))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/questions/{question_id}")
            .route(web::delete().to(questions::delete_question))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/quizzes")
            .route(web::post().to(quizzes::next_quiz_question))
            .default_service(web::route().to(method_not_allowed)),
    );
}
