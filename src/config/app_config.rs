use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub secrets: SecretsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

/// Where content records live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

/// Database settings that may also come from the secret store or plain env vars
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub dialect: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    /// `disable`, `prefer` or `require`
    pub ssl_mode: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    /// Apply pending migrations when the server starts
    pub auto_migrate: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    /// Role claim value required by mutating endpoints
    pub admin_role: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecretsConfig {
    pub provider: SecretsProviderKind,
    pub app_env: String,
    pub app_name: String,
    /// Overrides the `{app_env}/{app_name}` secret id
    pub secret_id: Option<String>,
    pub version_stage: String,
    pub region: Option<String>,
    /// Error codes that fall back to env/config instead of aborting startup
    pub tolerated_errors: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SecretsProviderKind {
    #[default]
    None,
    Aws,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dialect: None,
            host: None,
            port: None,
            user: None,
            password: None,
            name: None,
            ssl_mode: "prefer".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
            auto_migrate: true,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            admin_role: "admin".to_string(),
        }
    }
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            provider: SecretsProviderKind::default(),
            app_env: "development".to_string(),
            app_name: "cms".to_string(),
            secret_id: None,
            version_stage: "AWSCURRENT".to_string(),
            region: None,
            tolerated_errors: vec![
                "AccessDeniedException".to_string(),
                "ResourceNotFoundException".to_string(),
            ],
        }
    }
}

impl SecretsConfig {
    /// Secret id to request, `{app_env}/{app_name}` unless overridden
    pub fn resolved_secret_id(&self) -> String {
        self.secret_id
            .clone()
            .unwrap_or_else(|| format!("{}/{}", self.app_env, self.app_name))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("secrets.tolerated_errors")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(config.auth.admin_role, "admin");
        assert_eq!(config.secrets.provider, SecretsProviderKind::None);
        assert!(config.database.auto_migrate);
    }

    #[test]
    fn test_resolved_secret_id() {
        let mut secrets = SecretsConfig::default();
        assert_eq!(secrets.resolved_secret_id(), "development/cms");

        secrets.secret_id = Some("prod/cms-api".to_string());
        assert_eq!(secrets.resolved_secret_id(), "prod/cms-api");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [storage]
                backend = "memory"

                [logging]
                format = "json"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
