use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::question::NewQuestion;
use crate::domain::types::{
    AnswerText, CategoryId, Difficulty, QuestionText, TypeConstraintError,
};

/// Raw `POST /questions` body.
///
/// The route historically multiplexes two operations: a body carrying a
/// non-empty `searchTerm` is a search, anything else is a new-question
/// submission. [`QuestionsPostForm::into_operation`] makes that dispatch
/// explicit instead of leaving it to duck-typing in the handler.
#[derive(Debug, Deserialize, Validate)]
pub struct QuestionsPostForm {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    #[validate(range(min = 1))]
    pub category: Option<i32>,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: Option<i32>,
}

/// The two operations multiplexed behind `POST /questions`.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionsOperation {
    Search(SearchQuestionsPayload),
    Create(CreateQuestionPayload),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuestionsPayload {
    pub term: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateQuestionPayload {
    pub question: QuestionText,
    pub answer: AnswerText,
    pub category_id: CategoryId,
    pub difficulty: Difficulty,
}

impl CreateQuestionPayload {
    pub fn into_new_question(self) -> NewQuestion {
        NewQuestion {
            question: self.question,
            answer: self.answer,
            category_id: self.category_id,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Debug, Error)]
pub enum QuestionsFormError {
    #[error("questions form validation failed: {0}")]
    Validation(String),
    #[error("questions form is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("questions form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for QuestionsFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for QuestionsFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl QuestionsPostForm {
    /// Dispatches the payload onto one of the two explicit operations.
    pub fn into_operation(self) -> Result<QuestionsOperation, QuestionsFormError> {
        self.validate()?;

        if let Some(term) = &self.search_term {
            let term = term.trim();
            if !term.is_empty() {
                return Ok(QuestionsOperation::Search(SearchQuestionsPayload {
                    term: term.to_string(),
                }));
            }
        }

        let question = self
            .question
            .ok_or(QuestionsFormError::MissingField("question"))?;
        let answer = self
            .answer
            .ok_or(QuestionsFormError::MissingField("answer"))?;
        let category = self
            .category
            .ok_or(QuestionsFormError::MissingField("category"))?;
        let difficulty = self
            .difficulty
            .ok_or(QuestionsFormError::MissingField("difficulty"))?;

        Ok(QuestionsOperation::Create(CreateQuestionPayload {
            question: QuestionText::new(question)?,
            answer: AnswerText::new(answer)?,
            category_id: CategoryId::new(category)?,
            difficulty: Difficulty::new(difficulty)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_form() -> QuestionsPostForm {
        QuestionsPostForm {
            search_term: None,
            question: None,
            answer: None,
            category: None,
            difficulty: None,
        }
    }

    #[test]
    fn non_empty_search_term_selects_search() {
        let form = QuestionsPostForm {
            search_term: Some("  World Cup ".to_string()),
            ..empty_form()
        };

        let operation = form.into_operation().unwrap();
        assert_eq!(
            operation,
            QuestionsOperation::Search(SearchQuestionsPayload {
                term: "World Cup".to_string(),
            })
        );
    }

    #[test]
    fn blank_search_term_falls_through_to_create() {
        let form = QuestionsPostForm {
            search_term: Some("   ".to_string()),
            ..empty_form()
        };

        let err = form.into_operation().unwrap_err();
        assert!(matches!(err, QuestionsFormError::MissingField("question")));
    }

    #[test]
    fn create_requires_all_fields() {
        let form = QuestionsPostForm {
            question: Some("Who discovered penicillin?".to_string()),
            answer: Some("Alexander Fleming".to_string()),
            category: Some(1),
            difficulty: None,
            ..empty_form()
        };

        let err = form.into_operation().unwrap_err();
        assert!(matches!(
            err,
            QuestionsFormError::MissingField("difficulty")
        ));
    }

    #[test]
    fn create_rejects_whitespace_only_answer() {
        let form = QuestionsPostForm {
            question: Some("Who discovered penicillin?".to_string()),
            answer: Some("   ".to_string()),
            category: Some(1),
            difficulty: Some(3),
            ..empty_form()
        };

        assert!(form.into_operation().is_err());
    }

    #[test]
    fn create_rejects_out_of_range_difficulty() {
        let form = QuestionsPostForm {
            question: Some("Who discovered penicillin?".to_string()),
            answer: Some("Alexander Fleming".to_string()),
            category: Some(1),
            difficulty: Some(9),
            ..empty_form()
        };

        let err = form.into_operation().unwrap_err();
        assert!(matches!(err, QuestionsFormError::Validation(_)));
    }

    #[test]
    fn create_builds_typed_payload() {
        let form = QuestionsPostForm {
            question: Some(" Who discovered penicillin? ".to_string()),
            answer: Some("Alexander Fleming".to_string()),
            category: Some(1),
            difficulty: Some(3),
            ..empty_form()
        };

        let operation = form.into_operation().unwrap();
        let QuestionsOperation::Create(payload) = operation else {
            panic!("expected a create operation");
        };
        assert_eq!(payload.question.as_str(), "Who discovered penicillin?");
        assert_eq!(payload.category_id.get(), 1);
        assert_eq!(payload.difficulty.get(), 3);
    }
}
