//! Application state for shared services

use std::sync::Arc;

use crate::domain::{
    ContentRecord, ContentRepository, ContentSummary, ContentTypeEntry, CreateOutcome, DomainError,
};
use crate::infrastructure::auth::TokenVerifier;
use crate::infrastructure::content::{ContentService, CreateContentCommand, UpdateContentCommand};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<dyn ContentServiceTrait>,
    pub token_verifier: Arc<dyn TokenVerifier>,
    /// Role claim required by mutating endpoints
    pub admin_role: String,
}

impl AppState {
    pub fn new(
        content_service: Arc<dyn ContentServiceTrait>,
        token_verifier: Arc<dyn TokenVerifier>,
        admin_role: impl Into<String>,
    ) -> Self {
        Self {
            content_service,
            token_verifier,
            admin_role: admin_role.into(),
        }
    }
}

/// Trait for content service operations
#[async_trait::async_trait]
pub trait ContentServiceTrait: Send + Sync {
    async fn list(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
        language: Option<&str>,
    ) -> Result<Vec<ContentSummary>, DomainError>;
    async fn list_content_types(&self) -> Result<Vec<ContentTypeEntry>, DomainError>;
    async fn get(
        &self,
        content_type: &str,
        language: &str,
    ) -> Result<Option<ContentRecord>, DomainError>;
    async fn create(&self, command: CreateContentCommand) -> Result<CreateOutcome, DomainError>;
    async fn update(
        &self,
        content_type: &str,
        language: &str,
        command: UpdateContentCommand,
    ) -> Result<u64, DomainError>;
    async fn delete(&self, content_type: &str, language: &str) -> Result<u64, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: ContentRepository + 'static> ContentServiceTrait for ContentService<R> {
    async fn list(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
        language: Option<&str>,
    ) -> Result<Vec<ContentSummary>, DomainError> {
        ContentService::list(self, page, page_size, language).await
    }

    async fn list_content_types(&self) -> Result<Vec<ContentTypeEntry>, DomainError> {
        ContentService::list_content_types(self).await
    }

    async fn get(
        &self,
        content_type: &str,
        language: &str,
    ) -> Result<Option<ContentRecord>, DomainError> {
        ContentService::get(self, content_type, language).await
    }

    async fn create(&self, command: CreateContentCommand) -> Result<CreateOutcome, DomainError> {
        ContentService::create(self, command).await
    }

    async fn update(
        &self,
        content_type: &str,
        language: &str,
        command: UpdateContentCommand,
    ) -> Result<u64, DomainError> {
        ContentService::update(self, content_type, language, command).await
    }

    async fn delete(&self, content_type: &str, language: &str) -> Result<u64, DomainError> {
        ContentService::delete(self, content_type, language).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        ContentService::ping(self).await
    }
}
