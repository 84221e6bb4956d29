//! auth::errors
//!
//! Authentication error types.
//!
//! Messages never carry token values.
//!
//! # Example
//!
//! ```
//! use itemlink::auth::AuthError;
//!
//! let err = AuthError::NotAuthenticated {
//!     host: "github.com".to_string(),
//! };
//! assert!(err.to_string().contains("github.com"));
//! ```

use thiserror::Error;

use crate::secrets::SecretError;

/// Errors from authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No token exists for the host.
    #[error(
        "not authenticated for host '{host}'. Set GH_TOKEN or run 'itemlink auth --token'."
    )]
    NotAuthenticated { host: String },

    /// The secret store could not be read.
    #[error("secret store error: {0}")]
    Secret(#[from] SecretError),
}
