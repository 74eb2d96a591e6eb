//! PostgreSQL content repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::{
    ContentRecord, ContentRepository, ContentSlug, ContentSummary, ContentType, ContentTypeEntry,
    ContentUpdate, CreateOutcome, DomainError, LanguageCode, NewContent, Pagination,
};

/// SQLSTATE for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL implementation of ContentRepository
#[derive(Debug, Clone)]
pub struct PostgresContentRepository {
    pool: PgPool,
}

impl PostgresContentRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PostgresContentRepository {
    async fn list(
        &self,
        pagination: Pagination,
        language: Option<LanguageCode>,
    ) -> Result<Vec<ContentSummary>, DomainError> {
        let limit = i64::from(pagination.page_size());
        let offset = i64::try_from(pagination.offset())
            .map_err(|_| DomainError::validation("Page is out of range"))?;

        let rows = match language {
            Some(language) => {
                sqlx::query(
                    r#"
                    SELECT content_type, content_data, language
                    FROM content
                    WHERE language = $1
                    ORDER BY id ASC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(language.as_str())
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT content_type, content_data, language
                    FROM content
                    ORDER BY id ASC
                    LIMIT $1 OFFSET $2
                    "#,
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::storage(format!("Failed to list content: {}", e)))?;

        rows.iter()
            .map(|row| -> Result<ContentSummary, DomainError> {
                Ok(ContentSummary {
                    content_type: content_type_column(row)?,
                    content_data: row.get("content_data"),
                    language: language_column(row)?,
                })
            })
            .collect()
    }

    async fn list_content_types(&self) -> Result<Vec<ContentTypeEntry>, DomainError> {
        let rows = sqlx::query("SELECT content_type, language FROM content ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list content types: {}", e)))?;

        rows.iter()
            .map(|row| -> Result<ContentTypeEntry, DomainError> {
                Ok(ContentTypeEntry {
                    content_type: content_type_column(row)?,
                    language: language_column(row)?,
                })
            })
            .collect()
    }

    async fn get_by_slug(&self, slug: &ContentSlug) -> Result<Option<ContentRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, content_type, language, content_data, created_by, updated_by,
                   created_at, updated_at
            FROM content
            WHERE content_type = $1 AND language = $2
            "#,
        )
        .bind(slug.content_type.as_str())
        .bind(slug.language.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get content '{}': {}", slug, e)))?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn create(&self, content: NewContent) -> Result<CreateOutcome, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO content (content_type, language, content_data, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (content_type, language) DO NOTHING
            "#,
        )
        .bind(content.slug.content_type.as_str())
        .bind(content.slug.language.as_str())
        .bind(&content.content_data)
        .bind(content.created_by)
        .bind(content.updated_by)
        .execute(&self.pool)
        .await
        .map(|done| done.rows_affected());

        create_outcome(result).map_err(|e| {
            DomainError::storage(format!("Failed to create content '{}': {}", content.slug, e))
        })
    }

    async fn update(&self, slug: &ContentSlug, update: ContentUpdate) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE content
            SET content_data = $3, updated_by = $4, updated_at = NOW()
            WHERE content_type = $1 AND language = $2
            "#,
        )
        .bind(slug.content_type.as_str())
        .bind(slug.language.as_str())
        .bind(&update.content_data)
        .bind(update.updated_by)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update content '{}': {}", slug, e)))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, slug: &ContentSlug) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM content WHERE content_type = $1 AND language = $2")
            .bind(slug.content_type.as_str())
            .bind(slug.language.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to delete content '{}': {}", slug, e))
            })?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database is unreachable: {}", e)))?;

        Ok(())
    }
}

/// Map the insert result to an outcome; a skipped or conflicting insert means the pair exists
fn create_outcome(result: Result<u64, sqlx::Error>) -> Result<CreateOutcome, sqlx::Error> {
    match result {
        Ok(0) => Ok(CreateOutcome::AlreadyExists),
        Ok(_) => Ok(CreateOutcome::Created),
        Err(e) if is_unique_violation(&e) => Ok(CreateOutcome::AlreadyExists),
        Err(e) => Err(e),
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION)
}

fn content_type_column(row: &sqlx::postgres::PgRow) -> Result<ContentType, DomainError> {
    let value: String = row.get("content_type");
    ContentType::new(&value)
        .map_err(|e| DomainError::storage(format!("Invalid content type in database: {}", e)))
}

fn language_column(row: &sqlx::postgres::PgRow) -> Result<LanguageCode, DomainError> {
    let value: String = row.get("language");
    LanguageCode::new(&value)
        .map_err(|e| DomainError::storage(format!("Invalid language in database: {}", e)))
}

fn row_to_record(row: &sqlx::postgres::PgRow) -> Result<ContentRecord, DomainError> {
    Ok(ContentRecord {
        id: row.get("id"),
        content_type: content_type_column(row)?,
        language: language_column(row)?,
        content_data: row.get("content_data"),
        created_by: row.get("created_by"),
        updated_by: row.get("updated_by"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}
