//! forge::github
//!
//! GitHub GraphQL client.
//!
//! # Design
//!
//! This module implements the `GraphQlClient` trait for GitHub. Every
//! operation is a single `POST` to the GraphQL endpoint carrying the
//! document, the variables, and the operation name. There is no retry:
//! one call is one request.
//!
//! # Authentication
//!
//! Bearer tokens come from a [`TokenProvider`], fetched per request. A static
//! token constructor is available for tests and scripted use.
//!
//! # Example
//!
//! ```ignore
//! use itemlink::auth::StoredTokenProvider;
//! use itemlink::forge::github::{graphql_endpoint, GitHubGraphQlClient};
//! use std::sync::Arc;
//!
//! let provider = Arc::new(StoredTokenProvider::from_env("github.com", store));
//! let client = GitHubGraphQlClient::new_with_provider(provider, graphql_endpoint("github.com"));
//! ```
//!
//! [`TokenProvider`]: crate::auth::TokenProvider

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::traits::{ForgeError, GraphQlClient, GraphQlError};
use crate::auth::TokenProvider;

/// Public GitHub host.
pub const DEFAULT_HOST: &str = "github.com";

/// Default GitHub GraphQL endpoint.
const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "itemlink-cli";

/// GraphQL endpoint for a host.
///
/// `github.com` uses the public API host; GitHub Enterprise Server exposes
/// GraphQL under `/api/graphql` on the instance itself.
///
/// # Example
///
/// ```
/// use itemlink::forge::github::graphql_endpoint;
///
/// assert_eq!(graphql_endpoint("github.com"), "https://api.github.com/graphql");
/// assert_eq!(graphql_endpoint("ghe.example.com"), "https://ghe.example.com/api/graphql");
/// ```
pub fn graphql_endpoint(host: &str) -> String {
    if host.eq_ignore_ascii_case(DEFAULT_HOST) {
        GRAPHQL_ENDPOINT.to_string()
    } else {
        format!("https://{}/api/graphql", host)
    }
}

/// GitHub GraphQL client.
pub struct GitHubGraphQlClient {
    /// HTTP client for making requests
    client: Client,
    /// Token provider, consulted on every request
    token_provider: Option<Arc<dyn TokenProvider>>,
    /// Static token (tests, scripting)
    static_token: Option<String>,
    /// GraphQL endpoint URL
    endpoint: String,
}

// Custom Debug to avoid exposing static_token
impl std::fmt::Debug for GitHubGraphQlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubGraphQlClient")
            .field("has_token_provider", &self.token_provider.is_some())
            .field("has_static_token", &self.static_token.is_some())
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl GitHubGraphQlClient {
    /// Create a client that asks `provider` for a bearer token on each request.
    pub fn new_with_provider(provider: Arc<dyn TokenProvider>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token_provider: Some(provider),
            static_token: None,
            endpoint: endpoint.into(),
        }
    }

    /// Create a client with a fixed token.
    pub fn with_token(token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token_provider: None,
            static_token: Some(token.into()),
            endpoint: endpoint.into(),
        }
    }

    /// Get the GraphQL endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the current bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ForgeError::AuthRequired` if no token source is configured.
    /// Returns `ForgeError::AuthFailed` if the TokenProvider fails.
    async fn get_bearer_token(&self) -> Result<String, ForgeError> {
        if let Some(ref provider) = self.token_provider {
            provider
                .bearer_token()
                .await
                .map_err(|e| ForgeError::AuthFailed(e.to_string()))
        } else if let Some(ref token) = self.static_token {
            Ok(token.clone())
        } else {
            Err(ForgeError::AuthRequired)
        }
    }

    /// Build common headers for API requests.
    async fn headers(&self) -> Result<HeaderMap, ForgeError> {
        let token = self.get_bearer_token().await?;
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ForgeError::AuthFailed("token contains invalid characters".into()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        Ok(headers)
    }

    /// Post one GraphQL request and unwrap its `data`.
    async fn execute(
        &self,
        operation: &str,
        document: &str,
        variables: Value,
    ) -> Result<Value, ForgeError> {
        let body = GraphQlRequest {
            query: document,
            variables,
            operation_name: operation,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers().await?)
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<GitHubErrorResponse>()
                .await
                .map(|e| e.message)
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_status(status, message));
        }

        let result: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| ForgeError::Decode(format!("invalid GraphQL response: {}", e)))?;

        if let Some(errors) = result.errors {
            if !errors.is_empty() {
                return Err(ForgeError::GraphQl(errors));
            }
        }

        result
            .data
            .ok_or_else(|| ForgeError::Decode("GraphQL response has no data".into()))
    }
}

/// Map a non-success HTTP status onto a `ForgeError`.
fn map_status(status: StatusCode, message: String) -> ForgeError {
    match status {
        StatusCode::UNAUTHORIZED => ForgeError::AuthFailed("Invalid or expired token".into()),
        StatusCode::FORBIDDEN => ForgeError::Forbidden(message),
        StatusCode::TOO_MANY_REQUESTS => ForgeError::RateLimited,
        _ if status.is_server_error() => ForgeError::ApiError {
            status: status.as_u16(),
            message: format!("GitHub server error: {}", message),
        },
        _ => ForgeError::ApiError {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl GraphQlClient for GitHubGraphQlClient {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn query(
        &self,
        operation: &str,
        document: &str,
        variables: Value,
    ) -> Result<Value, ForgeError> {
        self.execute(operation, document, variables).await
    }

    async fn mutate(
        &self,
        operation: &str,
        document: &str,
        variables: Value,
    ) -> Result<Value, ForgeError> {
        self.execute(operation, document, variables).await
    }
}

// --------------------------------------------------------------------------
// API Request/Response Types
// --------------------------------------------------------------------------

/// GraphQL request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
    operation_name: &'a str,
}

/// GraphQL response wrapper.
#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphQlError>>,
}

/// GitHub error response format.
#[derive(Deserialize)]
struct GitHubErrorResponse {
    message: String,
}
