use diesel::prelude::*;

use crate::domain::question::{NewQuestion, Question};
use crate::domain::types::QuestionId;
use crate::models::question::{NewQuestion as DbNewQuestion, Question as DbQuestion};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, QuestionListQuery, QuestionReader, QuestionWriter};

impl QuestionReader for DieselRepository {
    fn list_questions(&self, query: QuestionListQuery) -> RepositoryResult<(usize, Vec<Question>)> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = questions::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(category_id) = query.category_id {
                items = items.filter(questions::category_id.eq(category_id.get()));
            }
            if let Some(search) = &query.search {
                // SQLite LIKE is case-insensitive for ASCII.
                items = items.filter(questions::question.like(format!("%{search}%")));
            }
            if !query.exclude_ids.is_empty() {
                let excluded: Vec<i32> = query.exclude_ids.iter().map(|id| id.get()).collect();
                items = items.filter(questions::id.ne_all(excluded));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            let offset = pagination.offset() as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let items = items
            .order(questions::id.asc())
            .load::<DbQuestion>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Question>, _>>()?;

        Ok((total, items))
    }

    fn get_question_by_id(&self, id: QuestionId) -> RepositoryResult<Option<Question>> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let question = questions::table
            .filter(questions::id.eq(id.get()))
            .first::<DbQuestion>(&mut conn)
            .optional()?;

        let question = question.map(TryInto::try_into).transpose()?;
        Ok(question)
    }
}

impl QuestionWriter for DieselRepository {
    fn create_question(&self, question: &NewQuestion) -> RepositoryResult<Question> {
        use crate::schema::questions;

        let mut conn = self.conn()?;
        let db_question: DbNewQuestion = question.clone().into();

        let inserted = diesel::insert_into(questions::table)
            .values(db_question)
            .get_result::<DbQuestion>(&mut conn)?;

        Ok(inserted.try_into()?)
    }

    fn delete_question(&self, id: QuestionId) -> RepositoryResult<usize> {
        use crate::schema::questions;

        let mut conn = self.conn()?;

        let affected = diesel::delete(questions::table.filter(questions::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
