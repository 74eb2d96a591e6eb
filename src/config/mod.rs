//! Configuration: file/env layered `AppConfig` and resolved `RuntimeSettings`

mod app_config;
mod runtime;

pub use app_config::{
    AppConfig, AuthConfig, DatabaseConfig, LogFormat, LoggingConfig, SecretsConfig,
    SecretsProviderKind, ServerConfig, StorageBackend, StorageConfig,
};
pub use runtime::{DatabaseSettings, RuntimeSettings};
