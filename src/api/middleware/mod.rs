//! API middleware components

pub mod auth;
pub mod language;
pub mod logging;
pub mod security;

pub use auth::{extract_bearer_token, AuthenticatedUser, RequireAdmin, RequireUser};
pub use language::LanguageHeader;
pub use logging::logging_middleware;
pub use security::security_headers_middleware;
