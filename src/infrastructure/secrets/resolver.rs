//! Resolution of `RuntimeSettings` from config, secret store and environment
//!
//! Precedence per key: plain env var > secret store value > `AppConfig`.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{AppConfig, DatabaseSettings, RuntimeSettings, StorageBackend};
use crate::domain::{DomainError, SecretBundle, SecretFetchError, SecretProvider};

use super::env_provider::EnvOverrides;

/// Decides which secret store failures are tolerated
#[derive(Debug, Clone, Default)]
pub struct SecretErrorPolicy {
    tolerated_codes: Vec<String>,
}

impl SecretErrorPolicy {
    pub fn new(tolerated_codes: Vec<String>) -> Self {
        Self { tolerated_codes }
    }

    /// A failure is tolerated only when it carries one of the configured codes
    pub fn tolerates(&self, error: &SecretFetchError) -> bool {
        error
            .code
            .as_deref()
            .is_some_and(|code| self.tolerated_codes.iter().any(|c| c == code))
    }
}

/// Resolves the settings the process runs with
#[derive(Debug)]
pub struct SettingsResolver {
    provider: Arc<dyn SecretProvider>,
    policy: SecretErrorPolicy,
    env: EnvOverrides,
}

impl SettingsResolver {
    pub fn new(provider: Arc<dyn SecretProvider>, policy: SecretErrorPolicy, env: EnvOverrides) -> Self {
        Self {
            provider,
            policy,
            env,
        }
    }

    pub async fn resolve(&self, config: &AppConfig) -> Result<RuntimeSettings, DomainError> {
        let bundle = self.fetch_bundle().await?;
        let lookup = |key: &str| -> Option<String> {
            self.env
                .get(key)
                .or_else(|| bundle.get(key))
                .map(str::to_string)
        };

        let port = match lookup("PORT") {
            Some(raw) => parse_number::<u16>("PORT", &raw)?,
            None => config.server.port,
        };

        let jwt_secret = lookup("JWT_SECRET")
            .or_else(|| config.auth.jwt_secret.clone())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DomainError::configuration("JWT_SECRET is not set"))?;

        let database = match config.storage.backend {
            StorageBackend::Postgres => Some(resolve_database(config, &lookup)?),
            StorageBackend::Memory => None,
        };

        Ok(RuntimeSettings {
            port,
            jwt_secret,
            database,
        })
    }

    async fn fetch_bundle(&self) -> Result<SecretBundle, DomainError> {
        match self.provider.fetch().await {
            Ok(bundle) => {
                info!(
                    provider = self.provider.provider_name(),
                    keys = bundle.len(),
                    "Secrets loaded"
                );
                Ok(bundle)
            }
            Err(e) if self.policy.tolerates(&e) => {
                warn!(
                    provider = self.provider.provider_name(),
                    code = e.code.as_deref().unwrap_or_default(),
                    "Secret store unavailable, falling back to environment and config: {}",
                    e
                );
                Ok(SecretBundle::new())
            }
            Err(e) => Err(DomainError::secret(format!(
                "Failed to load secrets from {}: {}",
                self.provider.provider_name(),
                e
            ))),
        }
    }
}

fn resolve_database(
    config: &AppConfig,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<DatabaseSettings, DomainError> {
    let db = &config.database;

    let dialect = lookup("DB_DIALECT").or_else(|| db.dialect.clone());
    if let Some(dialect) = dialect {
        if !matches!(dialect.to_lowercase().as_str(), "postgres" | "postgresql") {
            return Err(DomainError::configuration(format!(
                "Unsupported DB_DIALECT '{}', only postgres is supported",
                dialect
            )));
        }
    }

    let port = match lookup("DB_PORT") {
        Some(raw) => parse_number::<u16>("DB_PORT", &raw)?,
        None => db.port.unwrap_or(5432),
    };

    let required = |key: &str, fallback: &Option<String>| -> Result<String, DomainError> {
        lookup(key)
            .or_else(|| fallback.clone())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DomainError::configuration(format!("{} is not set", key)))
    };

    Ok(DatabaseSettings {
        host: required("DB_HOST", &db.host)?,
        port,
        user: required("DB_USER", &db.user)?,
        password: lookup("DB_PASSWORD").or_else(|| db.password.clone()),
        name: required("DB_NAME", &db.name)?,
        ssl_mode: db.ssl_mode.clone(),
        max_connections: db.max_connections,
        min_connections: db.min_connections,
        connect_timeout_secs: db.connect_timeout_secs,
        idle_timeout_secs: db.idle_timeout_secs,
    })
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, DomainError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| DomainError::configuration(format!("{} must be a number, got '{}'", key, raw)))
}
