//! Domain types for reviews.

mod error;
mod ids;
mod review;

pub use error::ReviewDomainError;
pub use ids::{RatingScore, ReviewId};
pub use review::{PersistedReviewData, Review};
