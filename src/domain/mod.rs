//! Domain layer - Core business logic and entities

pub mod content;
pub mod error;
pub mod secrets;

pub use content::{
    ContentRecord, ContentRepository, ContentSlug, ContentSummary, ContentType, ContentTypeEntry,
    ContentUpdate, ContentValidationError, CreateOutcome, LanguageCode, NewContent, Pagination,
    DEFAULT_LANGUAGE, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
pub use error::DomainError;
pub use secrets::{SecretBundle, SecretFetchError, SecretProvider};
