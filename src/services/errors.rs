use thiserror::Error;

/// Generic error type used by service layer functions.
///
/// Each variant maps onto one HTTP status in the uniform error body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request payload was malformed or missing required fields.
    #[error("bad request")]
    BadRequest,
    /// Requested resource was not found.
    #[error("resource not found")]
    NotFound,
    /// The request was well-formed but could not be processed.
    #[error("unprocessable")]
    Unprocessable,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
