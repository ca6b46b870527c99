//! Bearer-token authentication extractor.

use super::{ApiError, AppState};
use crate::identity::domain::UserId;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// The authenticated caller, extracted from the `Authorization` header.
///
/// Rejection is always a bare 401; the response never says whether the
/// header was missing, malformed, or carried a bad token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(ApiError::unauthorized)?;
        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(ApiError::unauthorized)?;
        let user_id = state
            .tokens
            .verify(token)
            .map_err(|_| ApiError::unauthorized())?;
        Ok(Self(user_id))
    }
}
