//! Port contracts for identity management.
//!
//! Ports define infrastructure-agnostic interfaces used by identity
//! services.

pub mod repository;
pub mod token;

pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};
pub use token::{TokenError, TokenIssuer};
