//! Error types for identity domain validation.

use thiserror::Error;

/// Errors returned while constructing identity domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The email address is malformed.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The display name is empty after trimming.
    #[error("name must not be empty")]
    EmptyDisplayName,

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,
}
