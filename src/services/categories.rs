use crate::domain::types::CategoryId;
use crate::dto::categories::category_map;
use crate::dto::questions::QuestionDto;
use crate::dto::responses::{CategoryListResponse, CategoryQuestionsResponse};
use crate::repository::{CategoryReader, QuestionListQuery, QuestionReader};

use super::{ServiceError, ServiceResult};

/// Core business logic for the `GET /categories` endpoint.
///
/// Returns the full id to display-name mapping; an empty table is not an
/// error, only storage failures are.
pub fn list_categories<R>(repo: &R) -> ServiceResult<CategoryListResponse>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(CategoryListResponse {
            success: true,
            categories: category_map(categories),
        }),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for the `GET /categories/{id}/questions` endpoint.
///
/// Returns every question in the category, unpaginated, along with the
/// category's display name. An unknown category is a missing resource.
pub fn list_category_questions<R>(
    category_id: i32,
    repo: &R,
) -> ServiceResult<CategoryQuestionsResponse>
where
    R: CategoryReader + QuestionReader,
{
    let category_id = match CategoryId::new(category_id) {
        Ok(category_id) => category_id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    let category = match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => category,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.list_questions(QuestionListQuery::default().category(category.id)) {
        Ok((total, questions)) => Ok(CategoryQuestionsResponse {
            success: true,
            questions: questions.into_iter().map(QuestionDto::from).collect(),
            total_questions: total,
            current_category: category.label.into_inner(),
        }),
        Err(e) => {
            log::error!("Failed to list questions for category: {e}");
            Err(ServiceError::Internal)
        }
    }
}
