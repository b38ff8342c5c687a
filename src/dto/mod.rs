//! JSON shapes returned by the API.

pub mod categories;
pub mod questions;
pub mod responses;
