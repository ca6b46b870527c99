//! Error types for chore domain validation, parsing, and transition guards.

use super::{ChoreId, ChoreStatus};
use thiserror::Error;

/// Errors returned while validating chore fields or guarding transitions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChoreDomainError {
    /// A required text field is empty after trimming.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// The payment amount is not a finite positive number.
    #[error("payment must be a positive amount")]
    NonPositivePayment(f64),

    /// The urgency label is not one of low/medium/high.
    #[error(transparent)]
    InvalidUrgency(#[from] ParseUrgencyError),

    /// The due date does not parse as a calendar date.
    #[error("invalid due date: {0}")]
    InvalidDueDate(String),

    /// A pagination parameter is zero.
    #[error("{0} must be a positive integer")]
    InvalidPagination(&'static str),

    /// The chore is not in the `active` state required to accept or apply.
    #[error("chore is not available")]
    NotAvailable {
        /// Chore whose acceptance was attempted.
        chore_id: ChoreId,
        /// Status observed at guard time.
        status: ChoreStatus,
    },

    /// The poster attempted to accept their own chore.
    #[error("cannot accept own chore")]
    CannotAcceptOwnChore(ChoreId),

    /// The chore is not in the `accepted` state required to complete.
    #[error("chore has not been accepted")]
    NotAccepted {
        /// Chore whose completion was attempted.
        chore_id: ChoreId,
        /// Status observed at guard time.
        status: ChoreStatus,
    },

    /// Someone other than the accepter attempted to complete the chore.
    #[error("only the accepter may complete this chore")]
    NotAccepter(ChoreId),

    /// The chore is not in the `active` state required to cancel.
    #[error("only an active chore can be cancelled")]
    NotCancellable {
        /// Chore whose cancellation was attempted.
        chore_id: ChoreId,
        /// Status observed at guard time.
        status: ChoreStatus,
    },

    /// Someone other than the poster attempted to cancel the chore.
    #[error("only the poster may cancel this chore")]
    NotPoster(ChoreId),
}

/// Error returned while parsing chore statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown chore status: {0}")]
pub struct ParseChoreStatusError(pub String);

/// Error returned while parsing urgency labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown urgency: {0}")]
pub struct ParseUrgencyError(pub String);

/// Error returned while parsing application statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown application status: {0}")]
pub struct ParseApplicationStatusError(pub String);

/// Error returned while parsing listing participant roles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown chore listing type: {0}")]
pub struct ParseParticipantRoleError(pub String);
