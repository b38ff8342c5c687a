use serde::Deserialize;

use crate::domain::types::QuestionId;
use crate::dto::categories::category_map;
use crate::dto::questions::QuestionDto;
use crate::dto::responses::{
    CreateQuestionResponse, DeleteQuestionResponse, QuestionListResponse, SearchQuestionsResponse,
};
use crate::forms::questions::{CreateQuestionPayload, SearchQuestionsPayload};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, last_page};
use crate::repository::{CategoryReader, QuestionListQuery, QuestionReader, QuestionWriter};

use super::{ServiceError, ServiceResult};

/// Query parameters accepted by the `GET /questions` endpoint.
#[derive(Deserialize, Debug)]
pub struct ListQuestionsParams {
    pub page: Option<usize>,
}

/// Core business logic for the `GET /questions` endpoint.
///
/// Returns one fixed-size page of questions ordered by id, the full category
/// mapping and the total count. A page past the end of the listing is a
/// missing resource, not an empty success.
pub fn list_questions<R>(params: ListQuestionsParams, repo: &R) -> ServiceResult<QuestionListResponse>
where
    R: QuestionReader + CategoryReader,
{
    let page = params.page.unwrap_or(1);

    let (total, questions) = match repo.list_questions(
        QuestionListQuery::default().paginate(page, DEFAULT_ITEMS_PER_PAGE),
    ) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to list questions: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if questions.is_empty() {
        return Err(ServiceError::NotFound);
    }

    let categories = match repo.list_categories() {
        Ok(categories) => categories,
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(QuestionListResponse {
        success: true,
        questions: questions.into_iter().map(QuestionDto::from).collect(),
        total_questions: total,
        categories: category_map(categories),
    })
}

/// Core business logic for the search branch of `POST /questions`.
///
/// Case-insensitive substring match over the question text; no match yields
/// an empty list, not an error.
pub fn search_questions<R>(
    payload: SearchQuestionsPayload,
    repo: &R,
) -> ServiceResult<SearchQuestionsResponse>
where
    R: QuestionReader,
{
    match repo.list_questions(QuestionListQuery::default().search(payload.term)) {
        Ok((total, questions)) => Ok(SearchQuestionsResponse {
            success: true,
            questions: questions.into_iter().map(QuestionDto::from).collect(),
            total_questions: total,
        }),
        Err(e) => {
            log::error!("Failed to search questions: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for the create branch of `POST /questions`.
///
/// The category reference must exist before the insert. The response lists
/// the page holding the new row, computed from the post-insert total.
pub fn create_question<R>(
    payload: CreateQuestionPayload,
    repo: &R,
) -> ServiceResult<CreateQuestionResponse>
where
    R: QuestionReader + QuestionWriter + CategoryReader,
{
    match repo.get_category_by_id(payload.category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::Unprocessable),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let created = match repo.create_question(&payload.into_new_question()) {
        Ok(question) => question,
        Err(e) => {
            log::error!("Failed to create question: {e}");
            return Err(ServiceError::Unprocessable);
        }
    };

    let (total, _) = match repo.list_questions(QuestionListQuery::default()) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to count questions: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let page = last_page(total, DEFAULT_ITEMS_PER_PAGE);
    let (_, questions) = match repo.list_questions(
        QuestionListQuery::default().paginate(page, DEFAULT_ITEMS_PER_PAGE),
    ) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to list questions: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(CreateQuestionResponse {
        success: true,
        created: created.id.get(),
        questions: questions.into_iter().map(QuestionDto::from).collect(),
        total_questions: total,
    })
}

/// Core business logic for the `DELETE /questions/{id}` endpoint.
///
/// A missing row is a 404; a storage-level delete failure surfaces as
/// unprocessable. The response lists the first page after deletion.
pub fn delete_question<R>(question_id: i32, repo: &R) -> ServiceResult<DeleteQuestionResponse>
where
    R: QuestionReader + QuestionWriter,
{
    let question_id = match QuestionId::new(question_id) {
        Ok(question_id) => question_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_question_by_id(question_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get question: {e}");
            return Err(ServiceError::Internal);
        }
    }

    if let Err(e) = repo.delete_question(question_id) {
        log::error!("Failed to delete question: {e}");
        return Err(ServiceError::Unprocessable);
    }

    match repo.list_questions(QuestionListQuery::default().paginate(1, DEFAULT_ITEMS_PER_PAGE)) {
        Ok((total, questions)) => Ok(DeleteQuestionResponse {
            success: true,
            deleted: question_id.get(),
            questions: questions.into_iter().map(QuestionDto::from).collect(),
            total_questions: total,
        }),
        Err(e) => {
            log::error!("Failed to list questions: {e}");
            Err(ServiceError::Internal)
        }
    }
}
