//! JWT-backed token issuer.
//!
//! Tokens are HS256-signed JWTs whose subject claim carries the user
//! identifier. Expiry is enforced by the standard `exp` validation.

use crate::identity::{
    domain::UserId,
    ports::{TokenError, TokenIssuer},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    iat: u64,
    exp: u64,
}

/// Token issuer signing HS256 JWTs with a shared secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtTokenIssuer {
    /// Creates an issuer from a shared secret and a token lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] when the secret is shorter than 32
    /// bytes.
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, TokenError> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(TokenError::Config(format!(
                "signing secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    fn now() -> Result<u64, TokenError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .map_err(|err| TokenError::Issuance(err.to_string()))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        let iat = Self::now()?;
        let claims = Claims {
            sub: user_id.into_inner(),
            iat,
            exp: iat + self.ttl.as_secs(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| TokenError::Issuance(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| TokenError::Invalid)?;
        Ok(UserId::from_uuid(data.claims.sub))
    }
}
