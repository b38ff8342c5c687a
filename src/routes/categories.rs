use actix_web::{HttpResponse, Responder, web};

use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::categories::{
    list_categories as list_categories_service,
    list_category_questions as list_category_questions_service,
};

pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_categories_service(repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => service_error_response(err),
    }
}

pub async fn list_category_questions(
    category_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_category_questions_service(category_id.into_inner(), repo.get_ref()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => service_error_response(err),
    }
}
