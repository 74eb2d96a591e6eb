//! Settings resolved once at startup from config, secrets and environment

use std::fmt::Debug;

/// Fully resolved process settings, passed by reference to whoever needs them
#[derive(Clone)]
pub struct RuntimeSettings {
    pub port: u16,
    pub jwt_secret: String,
    /// Present when the postgres backend is selected
    pub database: Option<DatabaseSettings>,
}

impl Debug for RuntimeSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeSettings")
            .field("port", &self.port)
            .field("jwt_secret", &"[hidden]")
            .field("database", &self.database)
            .finish()
    }
}

/// Connection settings for PostgreSQL
#[derive(Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
    pub ssl_mode: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[hidden]"))
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
