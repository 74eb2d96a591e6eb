//! In-memory content repository

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    ContentRecord, ContentRepository, ContentSlug, ContentSummary, ContentTypeEntry,
    ContentUpdate, CreateOutcome, DomainError, LanguageCode, NewContent, Pagination,
};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, ContentRecord>,
    next_id: i64,
}

impl Table {
    fn find_id(&self, slug: &ContentSlug) -> Option<i64> {
        self.rows
            .values()
            .find(|r| r.content_type == slug.content_type && r.language == slug.language)
            .map(|r| r.id)
    }
}

/// Content repository kept in process memory
///
/// Useful for tests and local runs. Data is lost when the process terminates.
/// Rows are keyed by id so iteration follows insertion order.
#[derive(Debug, Default)]
pub struct InMemoryContentRepository {
    table: RwLock<Table>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn list(
        &self,
        pagination: Pagination,
        language: Option<LanguageCode>,
    ) -> Result<Vec<ContentSummary>, DomainError> {
        let table = self.table.read().await;
        let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);

        Ok(table
            .rows
            .values()
            .filter(|r| language.as_ref().is_none_or(|l| &r.language == l))
            .skip(offset)
            .take(pagination.page_size() as usize)
            .map(ContentRecord::summary)
            .collect())
    }

    async fn list_content_types(&self) -> Result<Vec<ContentTypeEntry>, DomainError> {
        let table = self.table.read().await;

        Ok(table
            .rows
            .values()
            .map(|r| ContentTypeEntry {
                content_type: r.content_type.clone(),
                language: r.language.clone(),
            })
            .collect())
    }

    async fn get_by_slug(&self, slug: &ContentSlug) -> Result<Option<ContentRecord>, DomainError> {
        let table = self.table.read().await;

        Ok(table.find_id(slug).and_then(|id| table.rows.get(&id).cloned()))
    }

    async fn create(&self, content: NewContent) -> Result<CreateOutcome, DomainError> {
        let mut table = self.table.write().await;

        if table.find_id(&content.slug).is_some() {
            return Ok(CreateOutcome::AlreadyExists);
        }

        table.next_id += 1;
        let id = table.next_id;
        let now = Utc::now();

        table.rows.insert(
            id,
            ContentRecord {
                id,
                content_type: content.slug.content_type,
                language: content.slug.language,
                content_data: content.content_data,
                created_by: content.created_by,
                updated_by: content.updated_by,
                created_at: now,
                updated_at: now,
            },
        );

        Ok(CreateOutcome::Created)
    }

    async fn update(&self, slug: &ContentSlug, update: ContentUpdate) -> Result<u64, DomainError> {
        let mut table = self.table.write().await;

        let Some(id) = table.find_id(slug) else {
            return Ok(0);
        };

        match table.rows.get_mut(&id) {
            Some(record) => {
                record.content_data = update.content_data;
                record.updated_by = update.updated_by;
                record.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, slug: &ContentSlug) -> Result<u64, DomainError> {
        let mut table = self.table.write().await;

        match table.find_id(slug) {
            Some(id) => {
                table.rows.remove(&id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_content(content_type: &str, language: &str, data: &str) -> NewContent {
        NewContent {
            slug: ContentSlug::parse(content_type, language).unwrap(),
            content_data: data.to_string(),
            created_by: 1,
            updated_by: 1,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryContentRepository::new();

        let outcome = repo
            .create(new_content("aboutus", "en", "<div>About</div>"))
            .await
            .unwrap();
        assert_eq!(outcome, CreateOutcome::Created);

        let slug = ContentSlug::parse("aboutus", "en").unwrap();
        let record = repo.get_by_slug(&slug).await.unwrap().unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.content_data, "<div>About</div>");
        assert_eq!(record.created_at, record.updated_at);
    }

    #[tokio::test]
    async fn test_duplicate_key_any_casing() {
        let repo = InMemoryContentRepository::new();

        repo.create(new_content("faq", "en", "first")).await.unwrap();
        let outcome = repo.create(new_content("FAQ", "EN", "second")).await.unwrap();

        assert_eq!(outcome, CreateOutcome::AlreadyExists);
        assert_eq!(repo.list_content_types().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_pages_by_id() {
        let repo = InMemoryContentRepository::new();
        for i in 0..15 {
            repo.create(new_content(&format!("type{:02}", i), "en", "x"))
                .await
                .unwrap();
        }

        let first = repo.list(Pagination::new(1, 10).unwrap(), None).await.unwrap();
        let second = repo.list(Pagination::new(2, 10).unwrap(), None).await.unwrap();
        let third = repo.list(Pagination::new(3, 10).unwrap(), None).await.unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(first[0].content_type.as_str(), "type00");
        assert_eq!(first[9].content_type.as_str(), "type09");
        assert_eq!(second.len(), 5);
        assert_eq!(second[0].content_type.as_str(), "type10");
        assert!(third.is_empty());
    }

    #[tokio::test]
    async fn test_list_language_filter() {
        let repo = InMemoryContentRepository::new();
        repo.create(new_content("aboutus", "en", "en")).await.unwrap();
        repo.create(new_content("aboutus", "fr", "fr")).await.unwrap();
        repo.create(new_content("faq", "fr", "fr")).await.unwrap();

        let french = repo
            .list(Pagination::default(), Some(LanguageCode::new("FR").unwrap()))
            .await
            .unwrap();

        assert_eq!(french.len(), 2);
        assert!(french.iter().all(|c| c.language.as_str() == "fr"));
    }

    #[tokio::test]
    async fn test_update_missing_returns_zero() {
        let repo = InMemoryContentRepository::new();
        let slug = ContentSlug::parse("missing", "en").unwrap();

        let affected = repo
            .update(
                &slug,
                ContentUpdate {
                    content_data: "x".to_string(),
                    updated_by: 2,
                },
            )
            .await
            .unwrap();

        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn test_update_changes_data_and_author() {
        let repo = InMemoryContentRepository::new();
        repo.create(new_content("aboutus", "en", "old")).await.unwrap();
        let slug = ContentSlug::parse("aboutus", "en").unwrap();

        let affected = repo
            .update(
                &slug,
                ContentUpdate {
                    content_data: "new".to_string(),
                    updated_by: 7,
                },
            )
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let record = repo.get_by_slug(&slug).await.unwrap().unwrap();
        assert_eq!(record.content_data, "new");
        assert_eq!(record.updated_by, 7);
        assert_eq!(record.created_by, 1);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let repo = InMemoryContentRepository::new();
        repo.create(new_content("aboutus", "en", "x")).await.unwrap();
        let slug = ContentSlug::parse("aboutus", "en").unwrap();

        assert_eq!(repo.delete(&slug).await.unwrap(), 1);
        assert!(repo.get_by_slug(&slug).await.unwrap().is_none());
        assert_eq!(repo.delete(&slug).await.unwrap(), 0);
    }
}
