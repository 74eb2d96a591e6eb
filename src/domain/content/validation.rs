//! Content key validation utilities

use thiserror::Error;

/// Errors that can occur while validating a content key
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContentValidationError {
    #[error("Content type cannot be empty")]
    EmptyContentType,

    #[error("Content type exceeds maximum length of {0} characters")]
    ContentTypeTooLong(usize),

    #[error("Language cannot be empty")]
    EmptyLanguage,

    #[error("Language exceeds maximum length of {0} characters")]
    LanguageTooLong(usize),

    #[error("Page must be greater than zero")]
    InvalidPage,

    #[error("Page size must be greater than zero")]
    InvalidPageSize,
}

pub const MAX_CONTENT_TYPE_LENGTH: usize = 255;
pub const MAX_LANGUAGE_LENGTH: usize = 5;

/// Validate a content type (slug)
///
/// Rules:
/// - Cannot be empty
/// - Maximum 255 characters
pub fn validate_content_type(content_type: &str) -> Result<(), ContentValidationError> {
    if content_type.is_empty() {
        return Err(ContentValidationError::EmptyContentType);
    }

    if content_type.chars().count() > MAX_CONTENT_TYPE_LENGTH {
        return Err(ContentValidationError::ContentTypeTooLong(
            MAX_CONTENT_TYPE_LENGTH,
        ));
    }

    Ok(())
}

/// Validate a language code
///
/// Rules:
/// - Cannot be empty
/// - Maximum 5 characters (`en`, `pt-br`, ...)
pub fn validate_language(language: &str) -> Result<(), ContentValidationError> {
    if language.is_empty() {
        return Err(ContentValidationError::EmptyLanguage);
    }

    if language.chars().count() > MAX_LANGUAGE_LENGTH {
        return Err(ContentValidationError::LanguageTooLong(MAX_LANGUAGE_LENGTH));
    }

    Ok(())
}
