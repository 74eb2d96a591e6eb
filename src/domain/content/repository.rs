//! Content repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{
    ContentRecord, ContentSlug, ContentSummary, ContentTypeEntry, ContentUpdate, CreateOutcome,
    LanguageCode, NewContent, Pagination,
};
use crate::domain::DomainError;

/// Repository trait for content record storage
///
/// Keys reaching a repository are already normalized by the value types,
/// so implementations compare them verbatim.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync + Debug {
    /// List records ordered by ascending id, optionally restricted to one language
    async fn list(
        &self,
        pagination: Pagination,
        language: Option<LanguageCode>,
    ) -> Result<Vec<ContentSummary>, DomainError>;

    /// List the type/language pair of every record
    async fn list_content_types(&self) -> Result<Vec<ContentTypeEntry>, DomainError>;

    /// Get a record by its natural key
    async fn get_by_slug(&self, slug: &ContentSlug) -> Result<Option<ContentRecord>, DomainError>;

    /// Insert a record unless its key is already taken
    async fn create(&self, content: NewContent) -> Result<CreateOutcome, DomainError>;

    /// Update the record matching the key, returning the affected row count
    async fn update(&self, slug: &ContentSlug, update: ContentUpdate) -> Result<u64, DomainError>;

    /// Delete the record matching the key, returning the affected row count
    async fn delete(&self, slug: &ContentSlug) -> Result<u64, DomainError>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> Result<(), DomainError>;
}
