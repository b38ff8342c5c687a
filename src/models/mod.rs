//! Diesel row structs and their conversions to domain types.

pub mod category;
pub mod config;
pub mod question;
