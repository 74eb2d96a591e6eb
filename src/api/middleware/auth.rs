//! Bearer token authentication extractors

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

pub const MISSING_AUTHORIZATION: &str = "Header authorization not passed";
pub const INVALID_TOKEN: &str = "Invalid token";
pub const MISSING_CLAIMS: &str = "Token does not contain id or role of user";
pub const INVALID_USER: &str = "Invalid User";

/// Identity taken from a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub role: String,
}

/// Extractor that requires a valid bearer token carrying `id` and `role`
#[derive(Debug, Clone)]
pub struct RequireUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let claims = state.token_verifier.verify(&token).map_err(|e| {
            debug!("Token rejected: {}", e);
            ApiError::unauthorized(INVALID_TOKEN)
        })?;

        match (claims.id, claims.role) {
            (Some(id), Some(role)) if id != 0 && !role.is_empty() => {
                Ok(RequireUser(AuthenticatedUser { id, role }))
            }
            _ => Err(ApiError::unauthorized(MISSING_CLAIMS)),
        }
    }
}

/// Extractor that additionally requires the configured admin role
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthenticatedUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireUser(user) = RequireUser::from_request_parts(parts, state).await?;

        if user.role != state.admin_role {
            debug!(user_id = user.id, role = %user.role, "Admin access denied");
            return Err(ApiError::forbidden(INVALID_USER));
        }

        debug!(user_id = user.id, "Admin access granted");
        Ok(RequireAdmin(user))
    }
}

/// Extract the token from `Authorization: Bearer <token>`
///
/// The value must split on single spaces into exactly two parts and the
/// scheme is matched case-insensitively.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized(MISSING_AUTHORIZATION))?;

    let value = value
        .to_str()
        .map_err(|_| ApiError::unauthorized(INVALID_TOKEN))?;

    let parts: Vec<&str> = value.split(' ').collect();

    match parts.as_slice() {
        [scheme, token] if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            Ok(token.to_string())
        }
        _ => Err(ApiError::unauthorized(INVALID_TOKEN)),
    }
}
