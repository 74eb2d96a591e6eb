//! Request DTOs for the content endpoints

use serde::Deserialize;
use validator::Validate;

/// Query string of `GET /cms`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ListContentQuery {
    #[validate(range(min = 1, message = "page must be greater than or equal to 1"))]
    pub page: Option<u32>,

    #[validate(range(min = 1, message = "limit must be greater than or equal to 1"))]
    pub limit: Option<u32>,

    #[validate(length(
        min = 1,
        max = 5,
        message = "language length must be between 1 and 5 characters"
    ))]
    pub language: Option<String>,
}

/// Body of `POST /cms`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateContentRequest {
    #[validate(
        required(message = "contentType is required"),
        length(min = 1, message = "contentType is not allowed to be empty")
    )]
    pub content_type: Option<String>,

    #[validate(
        required(message = "contentData is required"),
        length(min = 1, message = "contentData is not allowed to be empty")
    )]
    pub content_data: Option<String>,
}

/// Body of `PUT /cms/{slug}`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateContentRequest {
    #[validate(
        required(message = "contentData is required"),
        length(min = 1, message = "contentData is not allowed to be empty")
    )]
    pub content_data: Option<String>,
}
