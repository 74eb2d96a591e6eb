//! `language` request header extractor

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::api::types::ApiError;
use crate::domain::{LanguageCode, DEFAULT_LANGUAGE};

pub const LANGUAGE_HEADER: &str = "language";

/// Language named by the `language` header, `en` when absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageHeader(pub LanguageCode);

impl LanguageHeader {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl<S> FromRequestParts<S> for LanguageHeader
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = match parts.headers.get(LANGUAGE_HEADER) {
            Some(value) => value
                .to_str()
                .map_err(|_| ApiError::bad_request("language header must be valid text"))?,
            None => DEFAULT_LANGUAGE,
        };

        LanguageCode::new(raw)
            .map(LanguageHeader)
            .map_err(|_| {
                ApiError::bad_request("language length must be between 1 and 5 characters")
            })
    }
}
