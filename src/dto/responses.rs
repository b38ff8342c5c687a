//! Typed success envelopes; every body carries the `success` flag.

use serde::Serialize;

use crate::dto::categories::CategoryMap;
use crate::dto::questions::QuestionDto;

/// Body of `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Body of `GET /questions`.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// Body of a successful question creation.
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

/// Body of a successful question search.
#[derive(Debug, Serialize)]
pub struct SearchQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

/// Body of `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

/// Body of `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: String,
}

/// Body of `POST /quizzes`; a null question signals an exhausted pool.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionDto>,
}
