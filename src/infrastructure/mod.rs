//! Infrastructure layer - External service implementations

pub mod auth;
pub mod content;
pub mod logging;
pub mod secrets;
pub mod storage;
