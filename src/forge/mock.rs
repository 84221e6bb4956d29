//! forge::mock
//!
//! Mock GraphQL client for deterministic testing.
//!
//! # Design
//!
//! Responses are scripted per operation name and every call is recorded, so
//! tests can assert both what the pipeline sent and that nothing was sent at
//! all. Scripted responses are queues: each call pops the next one, and the
//! last one keeps being replayed once the queue is down to a single entry.
//!
//! # Example
//!
//! ```
//! use itemlink::forge::mock::MockGraphQlClient;
//! use itemlink::forge::GraphQlClient;
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let client = MockGraphQlClient::new();
//! client.respond("ViewerOwner", json!({"viewer": {"id": "U_1", "login": "monalisa"}}));
//!
//! let data = client
//!     .query("ViewerOwner", "query ViewerOwner { viewer { id login } }", json!({}))
//!     .await
//!     .unwrap();
//! assert_eq!(data["viewer"]["login"], "monalisa");
//! assert_eq!(client.operations().len(), 1);
//! # });
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use super::traits::{ForgeError, GraphQlClient};

/// Mock GraphQL client for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockGraphQlClient {
    inner: Arc<Mutex<MockClientInner>>,
}

#[derive(Debug, Default)]
struct MockClientInner {
    /// Scripted results by operation name.
    scripted: HashMap<String, VecDeque<Result<Value, ForgeError>>>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Whether a recorded call was a query or a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq)]
pub struct MockOperation {
    pub kind: OperationKind,
    pub name: String,
    pub variables: Value,
}

impl MockGraphQlClient {
    /// Create a client with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful `data` payload for `operation`.
    pub fn respond(&self, operation: &str, data: Value) -> &Self {
        self.push(operation, Ok(data))
    }

    /// Script a failure for `operation`.
    pub fn fail(&self, operation: &str, error: ForgeError) -> &Self {
        self.push(operation, Err(error))
    }

    fn push(&self, operation: &str, result: Result<Value, ForgeError>) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .scripted
            .entry(operation.to_string())
            .or_default()
            .push_back(result);
        self
    }

    /// All recorded operations, in call order.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }

    /// Recorded operations of one kind.
    pub fn operations_of(&self, kind: OperationKind) -> Vec<MockOperation> {
        self.operations()
            .into_iter()
            .filter(|op| op.kind == kind)
            .collect()
    }

    /// Names of recorded operations, in call order.
    pub fn operation_names(&self) -> Vec<String> {
        self.operations().into_iter().map(|op| op.name).collect()
    }

    /// Clear recorded operations (scripted responses are kept).
    pub fn clear_operations(&self) {
        self.inner.lock().unwrap().operations.clear();
    }

    fn record(
        &self,
        kind: OperationKind,
        operation: &str,
        variables: Value,
    ) -> Result<Value, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation {
            kind,
            name: operation.to_string(),
            variables,
        });

        let queue = inner.scripted.get_mut(operation);
        match queue {
            Some(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or_else(|| unscripted(operation)),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| unscripted(operation)),
            None => unscripted(operation),
        }
    }
}

fn unscripted(operation: &str) -> Result<Value, ForgeError> {
    Err(ForgeError::ApiError {
        status: 500,
        message: format!("no scripted response for {}", operation),
    })
}

#[async_trait]
impl GraphQlClient for MockGraphQlClient {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn query(
        &self,
        operation: &str,
        _document: &str,
        variables: Value,
    ) -> Result<Value, ForgeError> {
        self.record(OperationKind::Query, operation, variables)
    }

    async fn mutate(
        &self,
        operation: &str,
        _document: &str,
        variables: Value,
    ) -> Result<Value, ForgeError> {
        self.record(OperationKind::Mutation, operation, variables)
    }
}
