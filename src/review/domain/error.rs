//! Domain errors for reviews.

use thiserror::Error;

/// Validation errors raised by review domain types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewDomainError {
    /// The rating falls outside the 1 to 5 scale.
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i32),
}
