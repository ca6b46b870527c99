//! Port contracts for chore persistence and listings.
//!
//! Ports define infrastructure-agnostic interfaces used by chore services.

pub mod repository;

pub use repository::{
    ApplicationRepositoryError, ApplicationRepositoryResult, ChoreApplicationRepository,
    ChoreFilter, ChoreRepository, ChoreRepositoryError, ChoreRepositoryResult, Page,
};
