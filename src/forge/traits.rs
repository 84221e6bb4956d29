//! forge::traits
//!
//! GraphQL client trait for talking to the remote API.
//!
//! # Design
//!
//! The `GraphQlClient` trait is async because every operation is a network
//! round trip. It deals in raw `serde_json::Value` so it stays object safe;
//! [`execute_query`] and [`execute_mutation`] decode the `data` payload into
//! a typed response on top of it.
//!
//! # Example
//!
//! ```ignore
//! use itemlink::forge::{execute_query, GraphQlClient, ForgeError};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Viewer { viewer: Login }
//! #[derive(Deserialize)]
//! struct Login { login: String }
//!
//! async fn whoami(client: &dyn GraphQlClient) -> Result<String, ForgeError> {
//!     let data: Viewer = execute_query(
//!         client,
//!         "Viewer",
//!         "query Viewer { viewer { login } }",
//!         serde_json::json!({}),
//!     )
//!     .await?;
//!     Ok(data.viewer.login)
//! }
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors from GraphQL operations.
///
/// These map the failure modes of a GraphQL endpoint: transport problems,
/// HTTP-level rejections, and errors reported inside a 200 response.
#[derive(Debug, Clone, Error)]
pub enum ForgeError {
    /// Authentication is required but not available.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed (invalid or expired token).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The token is valid but may not touch this resource (HTTP 403).
    /// Carries the server's message unchanged.
    #[error("permission denied: {0}")]
    Forbidden(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned a non-success HTTP status.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The server answered with one or more GraphQL errors.
    #[error("GraphQL: {}", join_messages(.0))]
    GraphQl(Vec<GraphQlError>),
}

impl ForgeError {
    /// True if any GraphQL error carries one of the given `type` codes.
    pub fn has_graphql_type(&self, types: &[&str]) -> bool {
        match self {
            ForgeError::GraphQl(errors) => errors
                .iter()
                .any(|e| e.kind.as_deref().is_some_and(|k| types.contains(&k))),
            _ => false,
        }
    }
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    /// Human-readable message, surfaced verbatim.
    pub message: String,
    /// GitHub's error classification (`NOT_FOUND`, `FORBIDDEN`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl GraphQlError {
    /// Create an error with a message and a type code.
    pub fn new(message: impl Into<String>, kind: Option<&str>) -> Self {
        Self {
            message: message.into(),
            kind: kind.map(str::to_string),
        }
    }
}

/// The client contract the resolution pipeline relies on.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// Both methods return the `data` member of the response on success. A
/// response carrying a non-empty `errors` array is an error even when `data`
/// is partially populated.
#[async_trait]
pub trait GraphQlClient: Send + Sync {
    /// Get the client name (e.g., "github", "mock").
    fn name(&self) -> &'static str;

    /// Execute a named read-only query.
    async fn query(
        &self,
        operation: &str,
        document: &str,
        variables: Value,
    ) -> Result<Value, ForgeError>;

    /// Execute a named mutation.
    async fn mutate(
        &self,
        operation: &str,
        document: &str,
        variables: Value,
    ) -> Result<Value, ForgeError>;
}

/// Execute a query and decode its `data` into `T`.
pub async fn execute_query<T: DeserializeOwned>(
    client: &dyn GraphQlClient,
    operation: &str,
    document: &str,
    variables: Value,
) -> Result<T, ForgeError> {
    let data = client.query(operation, document, variables).await?;
    decode(operation, data)
}

/// Execute a mutation and decode its `data` into `T`.
pub async fn execute_mutation<T: DeserializeOwned>(
    client: &dyn GraphQlClient,
    operation: &str,
    document: &str,
    variables: Value,
) -> Result<T, ForgeError> {
    let data = client.mutate(operation, document, variables).await?;
    decode(operation, data)
}

fn decode<T: DeserializeOwned>(operation: &str, data: Value) -> Result<T, ForgeError> {
    serde_json::from_value(data)
        .map_err(|e| ForgeError::Decode(format!("unexpected {} response: {}", operation, e)))
}
