//! core::errors
//!
//! Error taxonomy for the item-add pipeline.
//!
//! # Mapping
//!
//! Lookups (owner, project, content) fold access denial into `NotFound` so a
//! private project is indistinguishable from a missing one. The mutation
//! surfaces whatever the server said as `Upstream`, including an HTTP 403.
//! Connectivity and credential problems are `Transport` everywhere.

use thiserror::Error;

use crate::forge::ForgeError;

/// GraphQL error types that mean "you cannot see this".
const NOT_FOUND_TYPES: &[&str] = &["NOT_FOUND", "FORBIDDEN"];

/// Errors from the item-add pipeline.
#[derive(Debug, Error)]
pub enum ItemAddError {
    /// Flags are inconsistent or incomplete.
    #[error("{0}")]
    Configuration(String),

    /// A value has the wrong shape (number, URL, identifier).
    #[error("{0}")]
    Validation(String),

    /// Owner, project or content does not exist or is not accessible.
    #[error("{0}")]
    NotFound(String),

    /// The server rejected the request.
    #[error("{0}")]
    Upstream(String),

    /// The API could not be reached or refused our credentials.
    #[error(transparent)]
    Transport(ForgeError),

    /// The item could not be encoded as JSON.
    #[error("failed to serialize output")]
    Serialization(#[from] serde_json::Error),

    /// Writing to the output stream failed.
    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

impl ItemAddError {
    /// Map a failed lookup of `what` (e.g. "user 'octocat'").
    pub fn from_lookup(err: ForgeError, what: &str) -> Self {
        if matches!(err, ForgeError::Forbidden(_)) || err.has_graphql_type(NOT_FOUND_TYPES) {
            return ItemAddError::NotFound(format!("could not find {}", what));
        }
        match err {
            ForgeError::GraphQl(_) => ItemAddError::Upstream(err.to_string()),
            other => ItemAddError::Transport(other),
        }
    }

    /// Map a failed mutation. Server-side rejections pass through verbatim.
    pub fn from_mutation(err: ForgeError) -> Self {
        match err {
            ForgeError::Forbidden(message) => ItemAddError::Upstream(message),
            ForgeError::GraphQl(_) | ForgeError::ApiError { .. } => {
                ItemAddError::Upstream(err.to_string())
            }
            other => ItemAddError::Transport(other),
        }
    }

    /// Short category name, used in debug logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ItemAddError::Configuration(_) => "configuration",
            ItemAddError::Validation(_) => "validation",
            ItemAddError::NotFound(_) => "not_found",
            ItemAddError::Upstream(_) => "upstream",
            ItemAddError::Transport(_) => "transport",
            ItemAddError::Serialization(_) => "serialization",
            ItemAddError::Output(_) => "output",
        }
    }
}
