//! Application services for the review module.

mod reputation;

pub use reputation::{
    AddReviewRequest, ReputationError, ReputationResult, ReputationService, NEUTRAL_RATING,
};
