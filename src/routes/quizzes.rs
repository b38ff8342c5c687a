use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};

use crate::forms::quizzes::{QuizForm, QuizPayload};
use crate::repository::DieselRepository;
use crate::routes::{error_response, service_error_response};
use crate::services::quizzes::next_quiz_question as next_quiz_question_service;

pub async fn next_quiz_question(
    web::Json(form): web::Json<QuizForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: QuizPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(err) => {
            log::debug!("Rejected quiz payload: {err}");
            return error_response(StatusCode::BAD_REQUEST);
        }
    };

    match next_quiz_question_service(payload, repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => service_error_response(err),
    }
}
