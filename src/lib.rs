//! Core library exports for the trivia question bank service.
//!
//! This crate exposes the domain, forms, models, repositories, routes and
//! service layers used by the trivia web application.

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
