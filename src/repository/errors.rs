use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Getting a connection from the pool failed.
    #[error("database connection failed: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A query or statement failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored row violates a domain constraint.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<TypeConstraintError> for RepositoryError {
    fn from(value: TypeConstraintError) -> Self {
        RepositoryError::Validation(value.to_string())
    }
}
