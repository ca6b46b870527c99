//! `PostgreSQL` adapters for chore persistence.

mod models;
mod repository;
mod schema;

pub use repository::{ChorePgPool, PostgresChoreApplicationRepository, PostgresChoreRepository};
