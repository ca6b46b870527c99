//! Password hashing and verification using Argon2id.
//!
//! Hashes are PHC-formatted strings carrying the salt and parameters, so
//! verification needs no separate salt storage.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Error returned when hashing or verification cannot run.
///
/// A wrong password is not an error; [`verify_password`] reports it as
/// `Ok(false)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("credential hashing failed: {0}")]
pub struct CredentialHashError(String);

/// Hashes a password with a fresh random salt.
///
/// # Errors
///
/// Returns [`CredentialHashError`] when the hasher rejects its input.
pub fn hash_password(password: &str) -> Result<String, CredentialHashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| CredentialHashError(err.to_string()))
}

/// Verifies a password against a stored PHC hash.
///
/// # Errors
///
/// Returns [`CredentialHashError`] when the stored hash is not a valid PHC
/// string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, CredentialHashError> {
    let parsed = PasswordHash::new(hash).map_err(|err| CredentialHashError(err.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};
    use eyre::ensure;

    #[test]
    fn hash_and_verify_round_trip() -> eyre::Result<()> {
        let hash = hash_password("correct-horse-battery-staple")?;
        ensure!(hash.starts_with("$argon2"));
        ensure!(verify_password("correct-horse-battery-staple", &hash)?);
        ensure!(!verify_password("wrong-password", &hash)?);
        Ok(())
    }

    #[test]
    fn same_password_hashes_differently() -> eyre::Result<()> {
        let first = hash_password("same-password")?;
        let second = hash_password("same-password")?;
        ensure!(first != second);
        ensure!(verify_password("same-password", &first)?);
        ensure!(verify_password("same-password", &second)?);
        Ok(())
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("password", "not-a-phc-string").is_err());
    }
}
