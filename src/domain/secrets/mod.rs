//! Runtime secret sources

mod provider;

pub use provider::{SecretBundle, SecretFetchError, SecretProvider};
