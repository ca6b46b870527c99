//! In-memory adapters for chore persistence.

mod chore;

pub use chore::{InMemoryChoreApplicationRepository, InMemoryChoreRepository};
