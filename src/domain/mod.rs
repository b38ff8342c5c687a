//! Domain entities and strongly-typed value objects.

pub mod category;
pub mod question;
pub mod types;
