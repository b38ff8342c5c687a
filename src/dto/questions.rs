use serde::{Deserialize, Serialize};

use crate::domain::question::Question;

/// Wire representation of a question.
///
/// The category reference serializes as `category`, the field name clients
/// have always seen, even though the column is `category_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(value: Question) -> Self {
        Self {
            id: value.id.get(),
            question: value.question.into_inner(),
            answer: value.answer.into_inner(),
            category: value.category_id.get(),
            difficulty: value.difficulty.get(),
        }
    }
}
