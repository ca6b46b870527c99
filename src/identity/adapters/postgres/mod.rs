//! `PostgreSQL` adapters for user persistence.

mod models;
mod repository;
pub mod schema;

pub use repository::{IdentityPgPool, PostgresUserRepository};
