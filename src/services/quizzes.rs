use rand::seq::SliceRandom;

use crate::dto::questions::QuestionDto;
use crate::dto::responses::QuizResponse;
use crate::forms::quizzes::QuizPayload;
use crate::repository::{QuestionListQuery, QuestionReader};

use super::{ServiceError, ServiceResult};

/// Core business logic for the `POST /quizzes` endpoint.
///
/// Draws one question uniformly at random from the requested category (or
/// all categories) excluding everything the client has already been asked.
/// An exhausted pool ends the quiz with a null question; the service holds
/// no session state.
pub fn next_quiz_question<R>(payload: QuizPayload, repo: &R) -> ServiceResult<QuizResponse>
where
    R: QuestionReader,
{
    let mut query = QuestionListQuery::default().exclude(payload.previous_questions);
    if let Some(category_id) = payload.category_id {
        query = query.category(category_id);
    }

    let (_total, pool) = match repo.list_questions(query) {
        Ok(result) => result,
        Err(e) => {
            log::error!("Failed to build quiz candidate pool: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let question = pool.choose(&mut rand::thread_rng()).cloned();

    Ok(QuizResponse {
        success: true,
        question: question.map(QuestionDto::from),
    })
}
