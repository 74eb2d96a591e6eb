//! API types: envelope, errors, extractors and request DTOs

pub mod content;
pub mod envelope;
pub mod error;
pub mod json;
pub mod validation;

pub use content::{CreateContentRequest, ListContentQuery, UpdateContentRequest};
pub use envelope::{ApiResponse, EmptyData};
pub use error::{ApiError, ApiErrorKind, INTERNAL_SERVER_ERROR_MESSAGE};
pub use json::{Json, Query};
pub use validation::format_validation_errors;
