//! secrets::traits
//!
//! Key-value interface for stored credentials.
//!
//! Keys are namespaced by host (`github.com.pat`) so tokens for several
//! GitHub instances can live side by side. Implementations never put secret
//! values in errors or logs.

use thiserror::Error;

/// Errors from secret storage operations.
///
/// Messages never include secret values.
#[derive(Debug, Error)]
pub enum SecretError {
    /// Failed to read from secret storage.
    #[error("failed to read secret: {0}")]
    ReadError(String),

    /// Failed to write to secret storage.
    #[error("failed to write secret: {0}")]
    WriteError(String),

    /// Provider not available or not configured.
    #[error("secret provider not available: {0}")]
    ProviderNotAvailable(String),
}

/// Storage for secrets, shared across threads.
pub trait SecretStore: Send + Sync {
    /// Get a secret, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, SecretError>;

    /// Set a secret, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), SecretError>;

    /// Delete a secret. Deleting an absent key succeeds.
    fn delete(&self, key: &str) -> Result<(), SecretError>;

    /// Check if a secret exists.
    fn exists(&self, key: &str) -> Result<bool, SecretError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Secret key holding the token for `host`.
pub fn token_key(host: &str) -> String {
    format!("{}.pat", host.to_ascii_lowercase())
}
