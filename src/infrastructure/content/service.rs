//! Content service - normalizes caller input and delegates to the repository

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    ContentRecord, ContentRepository, ContentSlug, ContentSummary, ContentTypeEntry,
    ContentUpdate, ContentValidationError, CreateOutcome, DomainError, LanguageCode, NewContent,
    Pagination, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};

/// Input for creating a content record
#[derive(Debug, Clone)]
pub struct CreateContentCommand {
    pub content_type: String,
    pub language: String,
    pub content_data: String,
    /// Id of the authenticated user performing the change
    pub user_id: i64,
}

/// Input for updating a content record
#[derive(Debug, Clone)]
pub struct UpdateContentCommand {
    pub content_data: String,
    pub user_id: i64,
}

/// Content service
#[derive(Debug)]
pub struct ContentService<R: ContentRepository> {
    repository: Arc<R>,
}

impl<R: ContentRepository> ContentService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List a page of records, optionally for one language
    pub async fn list(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
        language: Option<&str>,
    ) -> Result<Vec<ContentSummary>, DomainError> {
        let pagination = Pagination::new(
            page.unwrap_or(DEFAULT_PAGE),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .map_err(validation_error)?;
        let language = language
            .map(LanguageCode::new)
            .transpose()
            .map_err(validation_error)?;

        debug!(
            page = pagination.page(),
            page_size = pagination.page_size(),
            language = language.as_ref().map(LanguageCode::as_str),
            "Listing content"
        );

        self.repository.list(pagination, language).await
    }

    pub async fn list_content_types(&self) -> Result<Vec<ContentTypeEntry>, DomainError> {
        self.repository.list_content_types().await
    }

    /// Get a record by content type and language, `None` when absent
    pub async fn get(
        &self,
        content_type: &str,
        language: &str,
    ) -> Result<Option<ContentRecord>, DomainError> {
        let slug = ContentSlug::parse(content_type, language).map_err(validation_error)?;
        self.repository.get_by_slug(&slug).await
    }

    pub async fn create(&self, command: CreateContentCommand) -> Result<CreateOutcome, DomainError> {
        let slug =
            ContentSlug::parse(&command.content_type, &command.language).map_err(validation_error)?;

        let outcome = self
            .repository
            .create(NewContent {
                slug: slug.clone(),
                content_data: command.content_data,
                created_by: command.user_id,
                updated_by: command.user_id,
            })
            .await?;

        match outcome {
            CreateOutcome::Created => info!(slug = %slug, user_id = command.user_id, "Content created"),
            CreateOutcome::AlreadyExists => debug!(slug = %slug, "Content already exists"),
        }

        Ok(outcome)
    }

    /// Update a record, returning the number of affected rows
    pub async fn update(
        &self,
        content_type: &str,
        language: &str,
        command: UpdateContentCommand,
    ) -> Result<u64, DomainError> {
        let slug = ContentSlug::parse(content_type, language).map_err(validation_error)?;

        let affected = self
            .repository
            .update(
                &slug,
                ContentUpdate {
                    content_data: command.content_data,
                    updated_by: command.user_id,
                },
            )
            .await?;

        if affected > 0 {
            info!(slug = %slug, user_id = command.user_id, "Content updated");
        }

        Ok(affected)
    }

    /// Delete a record, returning the number of affected rows
    pub async fn delete(&self, content_type: &str, language: &str) -> Result<u64, DomainError> {
        let slug = ContentSlug::parse(content_type, language).map_err(validation_error)?;
        let affected = self.repository.delete(&slug).await?;

        if affected > 0 {
            info!(slug = %slug, "Content deleted");
        }

        Ok(affected)
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }
}

fn validation_error(e: ContentValidationError) -> DomainError {
    DomainError::validation(e.to_string())
}
