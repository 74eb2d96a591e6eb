use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use thiserror::Error;

/// Key/value pairs read from a secret store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecretBundle {
    values: HashMap<String, String>,
}

impl SecretBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Parse a JSON object secret; numbers and booleans are kept as their text form
    pub fn from_json(secret_string: &str) -> Result<Self, SecretFetchError> {
        let data: serde_json::Map<String, serde_json::Value> = serde_json::from_str(secret_string)
            .map_err(|e| SecretFetchError::new(None, format!("Failed to parse secret as JSON: {}", e)))?;

        let values = data
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((key, text))
            })
            .collect();

        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Failure reported by a secret store
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct SecretFetchError {
    /// Store-specific error code (e.g. `AccessDeniedException`)
    pub code: Option<String>,
    pub message: String,
}

impl SecretFetchError {
    pub fn new(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Trait for runtime secret sources (AWS Secrets Manager, none, ...)
#[async_trait]
pub trait SecretProvider: Send + Sync + Debug {
    /// Fetch the full secret bundle for this process
    async fn fetch(&self) -> Result<SecretBundle, SecretFetchError>;

    /// Get provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_from_json_keeps_scalars() {
        let bundle =
            SecretBundle::from_json(r#"{"PORT": 3000, "DB_HOST": "db.local", "SSL": true}"#)
                .unwrap();

        assert_eq!(bundle.get("PORT"), Some("3000"));
        assert_eq!(bundle.get("DB_HOST"), Some("db.local"));
        assert_eq!(bundle.get("SSL"), Some("true"));
    }

    #[test]
    fn test_bundle_from_json_skips_nested_values() {
        let bundle = SecretBundle::from_json(r#"{"NESTED": {"a": 1}, "NULL": null}"#).unwrap();
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_bundle_from_invalid_json() {
        let result = SecretBundle::from_json("not json");
        assert!(result.is_err());
        assert!(result.unwrap_err().code.is_none());
    }
}
