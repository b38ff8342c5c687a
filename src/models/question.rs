use diesel::prelude::*;

use crate::domain::question::{Question as DomainQuestion, NewQuestion as DomainNewQuestion};
use crate::domain::types::{AnswerText, QuestionText, TypeConstraintError};

/// Diesel model representing the `questions` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::questions)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category_id: i32,
    pub difficulty: i32,
}

/// Insertable form of [`Question`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::questions)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category_id: i32,
    pub difficulty: i32,
}

impl TryFrom<Question> for DomainQuestion {
    type Error = TypeConstraintError;

    fn try_from(question: Question) -> Result<Self, Self::Error> {
        Ok(Self {
            id: question.id.try_into()?,
            question: QuestionText::new(question.question)?,
            answer: AnswerText::new(question.answer)?,
            category_id: question.category_id.try_into()?,
            difficulty: question.difficulty.try_into()?,
        })
    }
}

impl From<DomainNewQuestion> for NewQuestion {
    fn from(question: DomainNewQuestion) -> Self {
        Self {
            question: question.question.into_inner(),
            answer: question.answer.into_inner(),
            category_id: question.category_id.get(),
            difficulty: question.difficulty.get(),
        }
    }
}
