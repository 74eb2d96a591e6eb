//! Content record entity and related value types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_content_type, validate_language, ContentValidationError};

/// Language used when a caller does not name one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default page number for listings
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for listings
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Content slot identifier (e.g. `aboutus`), always lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentType(String);

impl ContentType {
    /// Create a new ContentType, lowercasing the input after validation
    pub fn new(value: impl AsRef<str>) -> Result<Self, ContentValidationError> {
        let value = value.as_ref();
        validate_content_type(value)?;
        Ok(Self(value.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContentType {
    type Error = ContentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        value.0
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Language code of a content record (max 5 characters), always lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a new LanguageCode, lowercasing the input after validation
    pub fn new(value: impl AsRef<str>) -> Result<Self, ContentValidationError> {
        let value = value.as_ref();
        validate_language(value)?;
        Ok(Self(value.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = ContentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageCode> for String {
    fn from(value: LanguageCode) -> Self {
        value.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Natural key of a content record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentSlug {
    pub content_type: ContentType,
    pub language: LanguageCode,
}

impl ContentSlug {
    pub fn new(content_type: ContentType, language: LanguageCode) -> Self {
        Self {
            content_type,
            language,
        }
    }

    /// Build a slug from raw caller input, normalizing both parts
    pub fn parse(
        content_type: impl AsRef<str>,
        language: impl AsRef<str>,
    ) -> Result<Self, ContentValidationError> {
        Ok(Self::new(
            ContentType::new(content_type)?,
            LanguageCode::new(language)?,
        ))
    }
}

impl std::fmt::Display for ContentSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.content_type, self.language)
    }
}

/// Page selection for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32) -> Result<Self, ContentValidationError> {
        if page == 0 {
            return Err(ContentValidationError::InvalidPage);
        }

        if page_size == 0 {
            return Err(ContentValidationError::InvalidPageSize);
        }

        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of records skipped before this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A stored content record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: i64,
    pub content_type: ContentType,
    pub language: LanguageCode,
    pub content_data: String,
    pub created_by: i64,
    pub updated_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentRecord {
    pub fn slug(&self) -> ContentSlug {
        ContentSlug::new(self.content_type.clone(), self.language.clone())
    }

    pub fn summary(&self) -> ContentSummary {
        ContentSummary {
            content_type: self.content_type.clone(),
            content_data: self.content_data.clone(),
            language: self.language.clone(),
        }
    }
}

/// Data required to insert a new record
#[derive(Debug, Clone)]
pub struct NewContent {
    pub slug: ContentSlug,
    pub content_data: String,
    pub created_by: i64,
    pub updated_by: i64,
}

/// Mutable part of a record
#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub content_data: String,
    pub updated_by: i64,
}

/// Listing projection of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummary {
    pub content_type: ContentType,
    pub content_data: String,
    pub language: LanguageCode,
}

/// Type/language pair of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeEntry {
    pub content_type: ContentType,
    pub language: LanguageCode,
}

/// Result of an insert attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_is_lowercased() {
        let content_type = ContentType::new("AboutUs").unwrap();
        assert_eq!(content_type.as_str(), "aboutus");
    }

    #[test]
    fn test_language_is_lowercased() {
        let language = LanguageCode::new("EN").unwrap();
        assert_eq!(language.as_str(), "en");
    }

    #[test]
    fn test_language_default() {
        assert_eq!(LanguageCode::default().as_str(), "en");
    }

    #[test]
    fn test_slug_parse_normalizes_both_parts() {
        let slug = ContentSlug::parse("PrivacyPolicy", "Pt-BR").unwrap();
        assert_eq!(slug.content_type.as_str(), "privacypolicy");
        assert_eq!(slug.language.as_str(), "pt-br");
        assert_eq!(slug.to_string(), "privacypolicy/pt-br");
    }

    #[test]
    fn test_slug_parse_rejects_long_language() {
        assert_eq!(
            ContentSlug::parse("aboutus", "english"),
            Err(ContentValidationError::LanguageTooLong(5))
        );
    }

    #[test]
    fn test_pagination_offset() {
        assert_eq!(Pagination::default().offset(), 0);
        assert_eq!(Pagination::new(2, 10).unwrap().offset(), 10);
        assert_eq!(Pagination::new(3, 25).unwrap().offset(), 50);
    }

    #[test]
    fn test_pagination_rejects_zero() {
        assert_eq!(Pagination::new(0, 10), Err(ContentValidationError::InvalidPage));
        assert_eq!(
            Pagination::new(1, 0),
            Err(ContentValidationError::InvalidPageSize)
        );
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = ContentSummary {
            content_type: ContentType::new("aboutus").unwrap(),
            content_data: "<div>About</div>".to_string(),
            language: LanguageCode::new("en").unwrap(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["contentType"], "aboutus");
        assert_eq!(json["contentData"], "<div>About</div>");
        assert_eq!(json["language"], "en");
    }

    #[test]
    fn test_content_type_deserialization_normalizes() {
        let content_type: ContentType = serde_json::from_str(r#""FAQ""#).unwrap();
        assert_eq!(content_type.as_str(), "faq");
    }
}
