//! JWT signing and validation with a shared HS256 secret

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Claims carried by tokens from the identity service
///
/// `id` and `role` are optional at decode time so that a token missing them
/// can be told apart from a token that fails verification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiration (Unix epoch); checked only when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl AuthClaims {
    /// Claims for a user, expiring after the given number of hours when set
    pub fn new(id: i64, role: impl Into<String>, expires_in_hours: Option<u64>) -> Self {
        let now = Utc::now();

        Self {
            id: Some(id),
            role: Some(role.into()),
            iat: Some(now.timestamp()),
            exp: expires_in_hours
                .map(|hours| (now + Duration::hours(hours as i64)).timestamp()),
        }
    }
}

/// Trait for token verification
pub trait TokenVerifier: Send + Sync + Debug {
    /// Verify signature and expiry, returning the decoded claims
    fn verify(&self, token: &str) -> Result<AuthClaims, DomainError>;
}

/// JWT service using a symmetric secret
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("algorithm", &Algorithm::HS256)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a token for the given claims
    pub fn sign(&self, claims: &AuthClaims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))
    }
}

impl TokenVerifier for JwtService {
    fn verify(&self, token: &str) -> Result<AuthClaims, DomainError> {
        let token_data = decode::<AuthClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| DomainError::unauthorized(format!("Invalid JWT: {}", e)))?;

        Ok(token_data.claims)
    }
}
