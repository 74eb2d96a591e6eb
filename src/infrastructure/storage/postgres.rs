//! PostgreSQL connection pooling

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};

use crate::config::DatabaseSettings;
use crate::domain::DomainError;

/// Build connection options from resolved settings
pub fn connect_options(settings: &DatabaseSettings) -> Result<PgConnectOptions, DomainError> {
    let ssl_mode: PgSslMode = settings.ssl_mode.parse().map_err(|e| {
        DomainError::configuration(format!("Invalid ssl_mode '{}': {}", settings.ssl_mode, e))
    })?;

    let mut options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .database(&settings.name)
        .ssl_mode(ssl_mode);

    if let Some(password) = &settings.password {
        options = options.password(password);
    }

    Ok(options)
}

/// Create a PostgreSQL connection pool
pub async fn connect_pool(settings: &DatabaseSettings) -> Result<PgPool, DomainError> {
    let options = connect_options(settings)?;

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(settings.idle_timeout_secs))
        .connect_with(options)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
}
