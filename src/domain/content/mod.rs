//! Content domain
//!
//! Domain types and traits for content records: the natural key
//! (content type + language), listing projections and the repository seam.

mod entity;
mod repository;
mod validation;

pub use entity::{
    ContentRecord, ContentSlug, ContentSummary, ContentType, ContentTypeEntry, ContentUpdate,
    CreateOutcome, LanguageCode, NewContent, Pagination, DEFAULT_LANGUAGE, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE,
};
pub use repository::ContentRepository;
pub use validation::{
    validate_content_type, validate_language, ContentValidationError, MAX_CONTENT_TYPE_LENGTH,
    MAX_LANGUAGE_LENGTH,
};

#[cfg(test)]
pub use repository::MockContentRepository;
