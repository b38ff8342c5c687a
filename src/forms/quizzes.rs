use serde::Deserialize;
use thiserror::Error;

use crate::domain::types::{CategoryId, QuestionId, TypeConstraintError};

/// Raw `POST /quizzes` body.
#[derive(Debug, Deserialize)]
pub struct QuizForm {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategoryForm>,
}

/// Category selector sent by the quiz client; id 0 means all categories.
#[derive(Debug, Deserialize)]
pub struct QuizCategoryForm {
    pub id: i32,
}

/// Validated quiz round request.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizPayload {
    /// Questions already asked this session; the client accumulates these.
    pub previous_questions: Vec<QuestionId>,
    /// `None` draws from all categories.
    pub category_id: Option<CategoryId>,
}

#[derive(Debug, Error)]
pub enum QuizFormError {
    #[error("quiz form is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("quiz form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<TypeConstraintError> for QuizFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<QuizForm> for QuizPayload {
    type Error = QuizFormError;

    fn try_from(value: QuizForm) -> Result<Self, Self::Error> {
        let previous = value
            .previous_questions
            .ok_or(QuizFormError::MissingField("previous_questions"))?;
        let category = value
            .quiz_category
            .ok_or(QuizFormError::MissingField("quiz_category"))?;

        let previous_questions = previous
            .into_iter()
            .map(QuestionId::new)
            .collect::<Result<Vec<_>, _>>()?;

        let category_id = if category.id == 0 {
            None
        } else {
            Some(CategoryId::new(category.id)?)
        };

        Ok(Self {
            previous_questions,
            category_id,
        })
    }
}
