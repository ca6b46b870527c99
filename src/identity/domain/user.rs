//! User aggregate root.

use super::{EmailAddress, IdentityDomainError, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// User aggregate root.
///
/// The credential hash is an opaque PHC-formatted string produced by the
/// service layer; the domain never sees plaintext.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    name: String,
    email: EmailAddress,
    password_hash: String,
    phone: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted display name.
    pub name: String,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted credential hash.
    pub password_hash: String,
    /// Persisted phone number, if any.
    pub phone: Option<String>,
    /// Persisted location, if any.
    pub location: Option<String>,
    /// Persisted bio, if any.
    pub bio: Option<String>,
    /// Persisted registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Updatable subset of profile fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement phone number.
    pub phone: Option<String>,
    /// Replacement location.
    pub location: Option<String>,
    /// Replacement bio.
    pub bio: Option<String>,
}

impl User {
    /// Creates a new user at registration time.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyDisplayName`] when the name is
    /// empty after trimming.
    pub fn register(
        name: impl Into<String>,
        email: EmailAddress,
        password_hash: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, IdentityDomainError> {
        let display_name = name.into();
        if display_name.trim().is_empty() {
            return Err(IdentityDomainError::EmptyDisplayName);
        }
        Ok(Self {
            id: UserId::new(),
            name: display_name,
            email,
            password_hash: password_hash.into(),
            phone: None,
            location: None,
            bio: None,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            phone: data.phone,
            location: data.location,
            bio: data.bio,
            created_at: data.created_at,
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the bio.
    #[must_use]
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the credential hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns the phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the location, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the bio, if any.
    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Returns the registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a profile update, leaving absent fields unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyDisplayName`] when the update
    /// supplies an empty name.
    pub fn apply_update(&mut self, update: ProfileUpdate) -> Result<(), IdentityDomainError> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(IdentityDomainError::EmptyDisplayName);
            }
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        Ok(())
    }
}
