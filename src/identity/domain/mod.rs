//! Domain model for user identity.

mod error;
mod ids;
mod user;

pub use error::IdentityDomainError;
pub use ids::{EmailAddress, UserId};
pub use user::{PersistedUserData, ProfileUpdate, User};
