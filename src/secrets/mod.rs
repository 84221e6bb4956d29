//! secrets
//!
//! Storage for API tokens.
//!
//! # Architecture
//!
//! Secrets are stored through the `SecretStore` trait. The only provider is
//! [`FileSecretStore`], a TOML file at `~/.itemlink/secrets.toml` written
//! atomically with 0600 permissions on Unix.
//!
//! # Example
//!
//! ```ignore
//! use itemlink::secrets::{create_store, token_key, DEFAULT_PROVIDER};
//!
//! let store = create_store(DEFAULT_PROVIDER)?;
//! store.set(&token_key("github.com"), "ghp_xxxx...")?;
//! ```

mod file_store;
mod traits;

pub use file_store::FileSecretStore;
pub use traits::{token_key, SecretError, SecretStore};

/// The default secret store provider name.
pub const DEFAULT_PROVIDER: &str = "file";

/// Create a secret store for the configured provider name.
///
/// # Errors
///
/// - Unknown provider name
/// - Home directory cannot be determined
pub fn create_store(provider: &str) -> Result<Box<dyn SecretStore>, SecretError> {
    match provider {
        "file" => Ok(Box::new(FileSecretStore::new()?)),
        other => Err(SecretError::ProviderNotAvailable(format!(
            "unknown secret provider: '{}' (valid: file)",
            other
        ))),
    }
}
