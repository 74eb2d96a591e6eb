//! Secret store implementations and settings resolution

mod aws_secrets_provider;
mod env_provider;
mod resolver;

pub use aws_secrets_provider::{
    AwsSecretsProvider, RealSecretsManagerClient, SecretsManagerClientTrait,
};
pub use env_provider::{EnvOverrides, NoopSecretProvider, SETTING_KEYS};
pub use resolver::{SecretErrorPolicy, SettingsResolver};
