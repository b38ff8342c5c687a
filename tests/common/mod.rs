//! Helpers for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

use trivia_api::db::{DbPool, establish_connection_pool};
use trivia_api::domain::question::NewQuestion;
use trivia_api::domain::types::{AnswerText, CategoryId, Difficulty, QuestionText};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
///
/// Migrations seed the six reference categories, so every test database
/// starts with categories 1 (Science) through 6 (Sports).
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// Builds an insertable question for test fixtures.
#[allow(dead_code)]
pub fn new_question(text: &str, category_id: i32, difficulty: i32) -> NewQuestion {
    NewQuestion {
        question: QuestionText::new(text).expect("valid question text"),
        answer: AnswerText::new("answer").expect("valid answer text"),
        category_id: CategoryId::new(category_id).expect("valid category id"),
        difficulty: Difficulty::new(difficulty).expect("valid difficulty"),
    }
}
