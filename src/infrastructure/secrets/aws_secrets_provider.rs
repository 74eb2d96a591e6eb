use async_trait::async_trait;
use aws_sdk_secretsmanager::error::ProvideErrorMetadata;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;

use crate::config::SecretsConfig;
use crate::domain::{SecretBundle, SecretFetchError, SecretProvider};

/// Trait for AWS Secrets Manager client operations (for mocking)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecretsManagerClientTrait: Send + Sync + std::fmt::Debug {
    async fn get_secret_value(
        &self,
        secret_id: &str,
        version_stage: &str,
    ) -> Result<String, SecretFetchError>;
}

/// Real AWS Secrets Manager client wrapper
#[derive(Debug)]
pub struct RealSecretsManagerClient {
    client: SecretsManagerClient,
}

impl RealSecretsManagerClient {
    pub fn new(client: SecretsManagerClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretsManagerClientTrait for RealSecretsManagerClient {
    async fn get_secret_value(
        &self,
        secret_id: &str,
        version_stage: &str,
    ) -> Result<String, SecretFetchError> {
        let response = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .version_stage(version_stage)
            .send()
            .await
            .map_err(|e| {
                let code = e.code().map(str::to_string);
                SecretFetchError::new(code, format!("AWS Secrets Manager error: {}", e))
            })?;

        response
            .secret_string()
            .map(|s| s.to_string())
            .ok_or_else(|| SecretFetchError::new(None, "Secret does not contain a string value"))
    }
}

/// Secret provider that reads one JSON secret from AWS Secrets Manager
#[derive(Debug)]
pub struct AwsSecretsProvider<C: SecretsManagerClientTrait> {
    client: C,
    secret_id: String,
    version_stage: String,
}

impl AwsSecretsProvider<RealSecretsManagerClient> {
    pub async fn from_config(config: &SecretsConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }

        let sdk_config = loader.load().await;
        let client = SecretsManagerClient::new(&sdk_config);

        Self::with_client(
            RealSecretsManagerClient::new(client),
            config.resolved_secret_id(),
            config.version_stage.clone(),
        )
    }
}

impl<C: SecretsManagerClientTrait> AwsSecretsProvider<C> {
    pub fn with_client(
        client: C,
        secret_id: impl Into<String>,
        version_stage: impl Into<String>,
    ) -> Self {
        Self {
            client,
            secret_id: secret_id.into(),
            version_stage: version_stage.into(),
        }
    }

    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }
}

#[async_trait]
impl<C: SecretsManagerClientTrait> SecretProvider for AwsSecretsProvider<C> {
    async fn fetch(&self) -> Result<SecretBundle, SecretFetchError> {
        let secret_string = self
            .client
            .get_secret_value(&self.secret_id, &self.version_stage)
            .await?;

        SecretBundle::from_json(&secret_string)
    }

    fn provider_name(&self) -> &'static str {
        "aws_secrets"
    }
}
