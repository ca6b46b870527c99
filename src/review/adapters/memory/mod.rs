//! In-memory adapters for review persistence.

mod review;

pub use review::InMemoryReviewRepository;
