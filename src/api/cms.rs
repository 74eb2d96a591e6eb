//! Content endpoints mounted under `/cms`

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use tracing::info;
use validator::Validate;

use crate::api::middleware::{LanguageHeader, RequireAdmin};
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, ApiResponse, CreateContentRequest, EmptyData, Json, ListContentQuery, Query,
    UpdateContentRequest,
};
use crate::domain::{ContentSummary, ContentTypeEntry, CreateOutcome};
use crate::infrastructure::content::{CreateContentCommand, UpdateContentCommand};

pub const CONTENTS_FETCHED: &str = "Contents fetched successfully";
pub const CONTENT_TYPES_FETCHED: &str = "Content types fetched successfully";
pub const CONTENT_FETCHED: &str = "Cms data fetched successfully";
pub const CONTENT_CREATED: &str = "Content created successfully";
pub const CONTENT_UPDATED: &str = "Content updated successfully";
pub const CONTENT_DELETED: &str = "Content deleted successfully";
pub const CONTENT_NOT_FOUND: &str = "Cms data not found";
pub const CONTENT_ALREADY_EXISTS: &str = "Content already exist";

/// Routes relative to `/cms`
pub fn create_cms_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contents).post(create_content))
        .route("/content-types", get(list_content_types))
        .route(
            "/{slug}",
            get(get_content).put(update_content).delete(delete_content),
        )
}

/// `GET /cms`
pub async fn list_contents(
    State(state): State<AppState>,
    Query(query): Query<ListContentQuery>,
) -> Result<ApiResponse<Vec<ContentSummary>>, ApiError> {
    info!(page = ?query.page, limit = ?query.limit, language = ?query.language, "Listing contents");
    query.validate()?;

    let contents = state
        .content_service
        .list(query.page, query.limit, query.language.as_deref())
        .await?;

    Ok(ApiResponse::ok(CONTENTS_FETCHED, contents))
}

/// `GET /cms/content-types`
pub async fn list_content_types(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<ContentTypeEntry>>, ApiError> {
    info!("Listing content types");
    let entries = state.content_service.list_content_types().await?;

    Ok(ApiResponse::ok(CONTENT_TYPES_FETCHED, entries))
}

/// `GET /cms/{slug}`
pub async fn get_content(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    language: LanguageHeader,
) -> Result<ApiResponse<ContentSummary>, ApiError> {
    info!(slug = %slug, language = %language.as_str(), "Fetching content");

    let record = state
        .content_service
        .get(&slug, language.as_str())
        .await?
        .ok_or_else(|| ApiError::not_found(CONTENT_NOT_FOUND))?;

    Ok(ApiResponse::ok(CONTENT_FETCHED, record.summary()))
}

/// `POST /cms`
pub async fn create_content(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    language: LanguageHeader,
    Json(request): Json<CreateContentRequest>,
) -> Result<ApiResponse<EmptyData>, ApiError> {
    info!(user_id = user.id, language = %language.as_str(), "Creating content");
    request.validate()?;

    let (Some(content_type), Some(content_data)) = (request.content_type, request.content_data)
    else {
        return Err(ApiError::bad_request("contentType and contentData are required"));
    };

    let outcome = state
        .content_service
        .create(CreateContentCommand {
            content_type,
            language: language.as_str().to_string(),
            content_data,
            user_id: user.id,
        })
        .await?;

    match outcome {
        CreateOutcome::Created => Ok(ApiResponse::created(CONTENT_CREATED, EmptyData::default())),
        CreateOutcome::AlreadyExists => Err(ApiError::conflict(CONTENT_ALREADY_EXISTS)),
    }
}

/// `PUT /cms/{slug}`
pub async fn update_content(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(slug): Path<String>,
    language: LanguageHeader,
    Json(request): Json<UpdateContentRequest>,
) -> Result<ApiResponse<EmptyData>, ApiError> {
    info!(user_id = user.id, slug = %slug, language = %language.as_str(), "Updating content");
    request.validate()?;

    let Some(content_data) = request.content_data else {
        return Err(ApiError::bad_request("contentData is required"));
    };

    let affected = state
        .content_service
        .update(
            &slug,
            language.as_str(),
            UpdateContentCommand {
                content_data,
                user_id: user.id,
            },
        )
        .await?;

    if affected == 0 {
        return Err(ApiError::not_found(CONTENT_NOT_FOUND));
    }

    Ok(ApiResponse::ok(CONTENT_UPDATED, EmptyData::default()))
}

/// `DELETE /cms/{slug}`
pub async fn delete_content(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(slug): Path<String>,
    language: LanguageHeader,
) -> Result<ApiResponse<EmptyData>, ApiError> {
    info!(user_id = user.id, slug = %slug, language = %language.as_str(), "Deleting content");

    let affected = state
        .content_service
        .delete(&slug, language.as_str())
        .await?;

    if affected == 0 {
        return Err(ApiError::not_found(CONTENT_NOT_FOUND));
    }

    Ok(ApiResponse::ok(CONTENT_DELETED, EmptyData::default()))
}
