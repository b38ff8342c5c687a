use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};

use crate::forms::questions::{QuestionsOperation, QuestionsPostForm};
use crate::repository::DieselRepository;
use crate::routes::{error_response, service_error_response};
use crate::services::questions::{
    ListQuestionsParams, create_question as create_question_service,
    delete_question as delete_question_service, list_questions as list_questions_service,
    search_questions as search_questions_service,
};

pub async fn list_questions(
    params: web::Query<ListQuestionsParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_questions_service(params.into_inner(), repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => service_error_response(err),
    }
}

/// One routed endpoint, two explicit operations: the form layer decides
/// whether the body is a search or a new-question submission.
pub async fn create_or_search_questions(
    web::Json(form): web::Json<QuestionsPostForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let operation = match form.into_operation() {
        Ok(operation) => operation,
        Err(err) => {
            log::debug!("Rejected questions payload: {err}");
            return error_response(StatusCode::BAD_REQUEST);
        }
    };

    match operation {
        QuestionsOperation::Search(payload) => {
            match search_questions_service(payload, repo.get_ref()) {
                Ok(response) => HttpResponse::Ok().json(response),
                Err(err) => service_error_response(err),
            }
        }
        QuestionsOperation::Create(payload) => {
            match create_question_service(payload, repo.get_ref()) {
                Ok(response) => HttpResponse::Ok().json(response),
                Err(err) => service_error_response(err),
            }
        }
    }
}

pub async fn delete_question(
    question_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_question_service(question_id.into_inner(), repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => service_error_response(err),
    }
}
