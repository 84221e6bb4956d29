//! auth
//!
//! Bearer tokens for the GitHub GraphQL API.
//!
//! # Token sources
//!
//! A token is looked up in this order, first hit wins:
//!
//! 1. `GH_TOKEN`
//! 2. `GITHUB_TOKEN`
//! 3. the secret store, under [`token_key`] for the host
//!
//! Tokens never appear in logs, errors, or `Debug` output.
//!
//! # Example
//!
//! ```ignore
//! use itemlink::auth::{StoredTokenProvider, TokenProvider};
//! use itemlink::secrets;
//!
//! let store = secrets::create_store(secrets::DEFAULT_PROVIDER)?;
//! let provider = StoredTokenProvider::from_env("github.com", store);
//! let token = provider.bearer_token().await?;
//! ```
//!
//! [`token_key`]: crate::secrets::token_key

mod errors;

use std::fmt;

use async_trait::async_trait;
use tracing::debug;

use crate::secrets::{token_key, SecretStore};

pub use errors::AuthError;

/// Environment variables checked for a token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Supplies bearer tokens to the GraphQL client.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns the token to send with the next request.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NotAuthenticated`] if no token exists
    /// - [`AuthError::Secret`] if the secret store fails
    async fn bearer_token(&self) -> Result<String, AuthError>;

    /// Whether a token is available, without fetching it.
    fn is_authenticated(&self) -> bool;

    /// The host this provider authenticates for.
    fn host(&self) -> &str;
}

/// Token provider backed by the environment and a secret store.
pub struct StoredTokenProvider {
    host: String,
    env_token: Option<String>,
    store: Box<dyn SecretStore>,
}

impl StoredTokenProvider {
    /// Provider with an explicit environment token (or none).
    pub fn new(host: &str, env_token: Option<String>, store: Box<dyn SecretStore>) -> Self {
        Self {
            host: host.to_string(),
            env_token: env_token.filter(|t| !t.trim().is_empty()),
            store,
        }
    }

    /// Provider that reads `GH_TOKEN` / `GITHUB_TOKEN` from the process environment.
    pub fn from_env(host: &str, store: Box<dyn SecretStore>) -> Self {
        Self::new(host, env_token(), store)
    }

    /// Whether the token came from the environment rather than the store.
    pub fn uses_env_token(&self) -> bool {
        self.env_token.is_some()
    }
}

/// First non-empty token in [`TOKEN_ENV_VARS`].
pub fn env_token() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|v| !v.trim().is_empty())
}

#[async_trait]
impl TokenProvider for StoredTokenProvider {
    async fn bearer_token(&self) -> Result<String, AuthError> {
        if let Some(ref token) = self.env_token {
            debug!(host = %self.host, "using token from environment");
            return Ok(token.clone());
        }

        match self.store.get(&token_key(&self.host))? {
            Some(token) if !token.trim().is_empty() => {
                debug!(host = %self.host, "using stored token");
                Ok(token.trim().to_string())
            }
            _ => Err(AuthError::NotAuthenticated {
                host: self.host.clone(),
            }),
        }
    }

    fn is_authenticated(&self) -> bool {
        self.env_token.is_some() || self.store.exists(&token_key(&self.host)).unwrap_or(false)
    }

    fn host(&self) -> &str {
        &self.host
    }
}

impl fmt::Debug for StoredTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredTokenProvider")
            .field("host", &self.host)
            .field("has_env_token", &self.env_token.is_some())
            .finish_non_exhaustive()
    }
}
