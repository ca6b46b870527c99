//! Service layer for registration, login, and profile maintenance.

use super::password::{CredentialHashError, hash_password, verify_password};
use crate::identity::{
    domain::{EmailAddress, IdentityDomainError, ProfileUpdate, User, UserId},
    ports::{TokenError, TokenIssuer, UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
    phone: Option<String>,
    location: Option<String>,
    bio: Option<String>,
}

impl RegisterRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            phone: None,
            location: None,
            bio: None,
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
}

/// Request payload for logging in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// A user together with a freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The authenticated user.
    pub user: User,
    /// Opaque bearer token carrying the user identity.
    pub token: String,
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] IdentityDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// Token issuance failed.
    #[error(transparent)]
    Token(#[from] TokenError),
    /// Credential hashing machinery failed.
    #[error(transparent)]
    Credential(#[from] CredentialHashError),
    /// The email/password pair did not authenticate. Deliberately does not
    /// say which half failed.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The user does not exist.
    #[error("user not found: {0}")]
    NotFound(UserId),
}

/// Result type for account service operations.
pub type AccountResult<T> = Result<T, AccountError>;

/// Account orchestration service.
#[derive(Clone)]
pub struct AccountService<R, T, C>
where
    R: UserRepository + ?Sized,
    T: TokenIssuer + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    tokens: Arc<T>,
    clock: Arc<C>,
}

impl<R, T, C> AccountService<R, T, C>
where
    R: UserRepository + ?Sized,
    T: TokenIssuer + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(repository: Arc<R>, tokens: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            repository,
            tokens,
            clock,
        }
    }

    /// Registers a new user and issues a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Domain`] when a field is invalid, or
    /// [`AccountError::Repository`] when the email is already registered or
    /// persistence fails.
    pub async fn register(&self, request: RegisterRequest) -> AccountResult<AuthenticatedUser> {
        if request.password.is_empty() {
            return Err(IdentityDomainError::EmptyPassword.into());
        }
        let email = EmailAddress::new(request.email)?;
        let password_hash = hash_password(&request.password)?;

        let mut user = User::register(request.name, email, password_hash, &*self.clock)?;
        if let Some(phone) = request.phone {
            user = user.with_phone(phone);
        }
        if let Some(location) = request.location {
            user = user.with_location(location);
        }
        if let Some(bio) = request.bio {
            user = user.with_bio(bio);
        }

        self.repository.store(&user).await?;
        let token = self.tokens.issue(user.id())?;
        Ok(AuthenticatedUser { user, token })
    }

    /// Authenticates an email/password pair and issues a bearer token.
    ///
    /// Unknown email and wrong password both yield
    /// [`AccountError::InvalidCredentials`]; when the user is missing a hash
    /// is still computed so the two paths cost comparable effort.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::InvalidCredentials`] when the pair does not
    /// authenticate.
    pub async fn login(&self, request: LoginRequest) -> AccountResult<AuthenticatedUser> {
        let Ok(email) = EmailAddress::new(request.email) else {
            hash_password(&request.password)?;
            return Err(AccountError::InvalidCredentials);
        };
        let Some(user) = self.repository.find_by_email(&email).await? else {
            hash_password(&request.password)?;
            return Err(AccountError::InvalidCredentials);
        };
        if !verify_password(&request.password, user.password_hash())? {
            return Err(AccountError::InvalidCredentials);
        }
        let token = self.tokens.issue(user.id())?;
        Ok(AuthenticatedUser { user, token })
    }

    /// Retrieves a user profile.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotFound`] when the user does not exist.
    pub async fn profile(&self, user_id: UserId) -> AccountResult<User> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::NotFound(user_id))
    }

    /// Applies a profile update and returns the stored user.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::NotFound`] when the user does not exist, or
    /// [`AccountError::Domain`] when the update is invalid.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        update: ProfileUpdate,
    ) -> AccountResult<User> {
        let mut user = self.profile(user_id).await?;
        user.apply_update(update)?;
        self.repository.update(&user).await?;
        Ok(user)
    }
}
