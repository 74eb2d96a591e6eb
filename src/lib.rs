//! CMS API
//!
//! Content records keyed by content type and language, served over HTTP:
//! - Paginated listing and lookup by slug for anyone
//! - Create, update and delete for bearer tokens carrying the admin role
//! - Settings resolved once at startup from config, a secret store and env vars

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{AppConfig, RuntimeSettings};

use std::sync::Arc;

use anyhow::Context;
use api::state::{AppState, ContentServiceTrait};
use config::{SecretsProviderKind, StorageBackend};
use domain::SecretProvider;
use infrastructure::{
    auth::JwtService,
    content::{ContentService, InMemoryContentRepository, PostgresContentRepository},
    secrets::{
        AwsSecretsProvider, EnvOverrides, NoopSecretProvider, SecretErrorPolicy, SettingsResolver,
    },
    storage::{connect_pool, run_migrations},
};
use tracing::info;

/// Build the secret provider selected by `secrets.provider`
pub async fn create_secret_provider(config: &AppConfig) -> Arc<dyn SecretProvider> {
    match config.secrets.provider {
        SecretsProviderKind::Aws => {
            let provider = AwsSecretsProvider::from_config(&config.secrets).await;
            info!(secret_id = %provider.secret_id(), "Using AWS Secrets Manager");
            Arc::new(provider)
        }
        SecretsProviderKind::None => Arc::new(NoopSecretProvider),
    }
}

/// Resolve runtime settings: env var > secret store > config file
pub async fn resolve_settings(config: &AppConfig) -> anyhow::Result<RuntimeSettings> {
    let resolver = SettingsResolver::new(
        create_secret_provider(config).await,
        SecretErrorPolicy::new(config.secrets.tolerated_errors.clone()),
        EnvOverrides::from_process(),
    );

    resolver
        .resolve(config)
        .await
        .context("Failed to resolve runtime settings")
}

/// Create the application state for the configured storage backend
pub async fn create_app_state_with_config(
    config: &AppConfig,
    settings: &RuntimeSettings,
) -> anyhow::Result<AppState> {
    info!("Storage backend: {:?}", config.storage.backend);

    let content_service: Arc<dyn ContentServiceTrait> = match config.storage.backend {
        StorageBackend::Postgres => {
            let database = settings
                .database
                .as_ref()
                .context("Database settings are required for the postgres backend")?;

            info!(host = %database.host, name = %database.name, "Connecting to PostgreSQL...");
            let pool = connect_pool(database).await?;
            info!("PostgreSQL connection established");

            if config.database.auto_migrate {
                let applied = run_migrations(&pool).await?;
                info!(applied, "Database migrations complete");
            }

            Arc::new(ContentService::new(Arc::new(PostgresContentRepository::new(
                pool,
            ))))
        }
        StorageBackend::Memory => {
            info!("Using in-memory content storage");
            Arc::new(ContentService::new(Arc::new(
                InMemoryContentRepository::new(),
            )))
        }
    };

    Ok(AppState::new(
        content_service,
        Arc::new(JwtService::new(&settings.jwt_secret)),
        config.auth.admin_role.clone(),
    ))
}
