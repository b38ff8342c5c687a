use std::sync::Mutex;

use crate::domain::category::Category;
use crate::domain::question::{NewQuestion, Question};
use crate::domain::types::{CategoryId, QuestionId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CategoryReader, QuestionListQuery, QuestionReader, QuestionWriter,
};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    categories: Vec<Category>,
    questions: Mutex<Vec<Question>>,
    fail_writes: bool,
}

impl TestRepository {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            categories: Vec::new(),
            questions: Mutex::new(questions),
            fail_writes: false,
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Makes every write operation fail as if the storage layer did.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let mut items = self.categories.clone();
        items.sort_by_key(|c| c.id);
        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }
}

impl QuestionReader for TestRepository {
    fn list_questions(&self, query: QuestionListQuery) -> RepositoryResult<(usize, Vec<Question>)> {
        let questions = self.questions.lock().unwrap();
        let mut items: Vec<Question> = questions.clone();

        if let Some(category_id) = query.category_id {
            items.retain(|q| q.category_id == category_id);
        }
        if let Some(search) = &query.search {
            let search = search.to_lowercase();
            items.retain(|q| q.question.as_str().to_lowercase().contains(&search));
        }
        if !query.exclude_ids.is_empty() {
            items.retain(|q| !query.exclude_ids.contains(&q.id));
        }
        items.sort_by_key(|q| q.id);

        let total = items.len();
        if let Some(pagination) = &query.pagination {
            let start = pagination.offset().min(items.len());
            let end = (start + pagination.per_page).min(items.len());
            items = items[start..end].to_vec();
        }

        Ok((total, items))
    }

    fn get_question_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>> {
        let questions = self.questions.lock().unwrap();
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }
}

impl QuestionWriter for TestRepository {
    fn create_question(&self, question: &NewQuestion) -> RepositoryResult<Question> {
        if self.fail_writes {
            return Err(RepositoryError::Database(
                diesel::result::Error::RollbackTransaction,
            ));
        }

        let mut questions = self.questions.lock().unwrap();
        let next_id = questions.iter().map(|q| q.id.get()).max().unwrap_or(0) + 1;
        let created = Question {
            id: QuestionId::new(next_id).unwrap(),
            question: question.question.clone(),
            answer: question.answer.clone(),
            category_id: question.category_id,
            difficulty: question.difficulty,
        };
        questions.push(created.clone());
        Ok(created)
    }

    fn delete_question(&self, id: QuestionId) -> RepositoryResult<usize> {
        if self.fail_writes {
            return Err(RepositoryError::Database(
                diesel::result::Error::RollbackTransaction,
            ));
        }

        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(before - questions.len())
    }
}
