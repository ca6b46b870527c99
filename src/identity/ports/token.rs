//! Token port for opaque bearer credentials.

use crate::identity::domain::UserId;
use thiserror::Error;

/// Issues and verifies opaque bearer tokens carrying a user identity.
///
/// The token format is an adapter concern; services and the HTTP boundary
/// only see strings.
pub trait TokenIssuer: Send + Sync {
    /// Issues a token for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Issuance`] when signing fails.
    fn issue(&self, user_id: UserId) -> Result<String, TokenError>;

    /// Verifies a token and returns the user identity it carries.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] when the token is malformed, has a
    /// bad signature, or has expired.
    fn verify(&self, token: &str) -> Result<UserId, TokenError>;
}

/// Errors returned by token issuer implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The token is malformed, forged, or expired.
    #[error("invalid or expired token")]
    Invalid,

    /// Token signing failed.
    #[error("token issuance failed: {0}")]
    Issuance(String),

    /// The signing configuration is unusable.
    #[error("token configuration invalid: {0}")]
    Config(String),
}
