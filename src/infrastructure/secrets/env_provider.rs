use async_trait::async_trait;
use std::collections::HashMap;
use std::env;

use crate::domain::{SecretBundle, SecretFetchError, SecretProvider};

/// Keys that can be supplied by the secret store or overridden by plain env vars
pub const SETTING_KEYS: &[&str] = &[
    "PORT",
    "DB_HOST",
    "DB_PORT",
    "DB_DIALECT",
    "DB_USER",
    "DB_PASSWORD",
    "DB_NAME",
    "JWT_SECRET",
];

/// Snapshot of the plain environment variables that override secret values
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    values: HashMap<String, String>,
}

impl EnvOverrides {
    /// Read every known setting key from the process environment
    pub fn from_process() -> Self {
        let values = SETTING_KEYS
            .iter()
            .filter_map(|key| {
                env::var(key)
                    .ok()
                    .filter(|v| !v.is_empty())
                    .map(|v| (key.to_string(), v))
            })
            .collect();

        Self { values }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Secret provider used when no secret store is configured
#[derive(Debug, Default)]
pub struct NoopSecretProvider;

#[async_trait]
impl SecretProvider for NoopSecretProvider {
    async fn fetch(&self) -> Result<SecretBundle, SecretFetchError> {
        Ok(SecretBundle::new())
    }

    fn provider_name(&self) -> &'static str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_process_reads_known_keys() {
        // SAFETY: Test runs in isolation
        unsafe { env::set_var("DB_NAME", "cms_test_db") };

        let overrides = EnvOverrides::from_process();
        assert_eq!(overrides.get("DB_NAME"), Some("cms_test_db"));

        // SAFETY: Test cleanup
        unsafe { env::remove_var("DB_NAME") };
    }

    #[test]
    fn test_from_pairs() {
        let overrides = EnvOverrides::from_pairs([("PORT", "9000")]);
        assert_eq!(overrides.get("PORT"), Some("9000"));
        assert_eq!(overrides.get("DB_HOST"), None);
    }

    #[tokio::test]
    async fn test_noop_provider_is_empty() {
        let bundle = NoopSecretProvider.fetch().await.unwrap();
        assert!(bundle.is_empty());
    }
}
