//! Request payloads and their conversion into validated typed payloads.

pub mod questions;
pub mod quizzes;
