//! `PostgreSQL` adapters for review persistence.

mod models;
mod repository;
pub mod schema;

pub use repository::{PostgresReviewRepository, ReviewPgPool};
