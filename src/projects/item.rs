//! projects::item
//!
//! The "add item to project" mutation and the item record it returns.
//!
//! # Design
//!
//! [`ProjectItem`] mirrors the server's JSON shape, so encoding it for
//! `--format json` reproduces what the server returned. Nothing here
//! deduplicates: adding the same content twice is whatever the server
//! decides it is.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::core::errors::ItemAddError;
use crate::core::types::ContentId;
use crate::forge::{execute_mutation, GraphQlClient};

/// Operation name of the mutation.
pub const ADD_ITEM_OPERATION: &str = "AddItem";

const ADD_ITEM_MUTATION: &str = r#"mutation AddItem($projectId: ID!, $contentId: ID!) {
    addProjectV2ItemById(input: {projectId: $projectId, contentId: $contentId}) {
        item {
            id
            type
            content {
                __typename
                ... on Issue { title number url body repository { nameWithOwner } }
                ... on PullRequest { title number url body repository { nameWithOwner } }
                ... on DraftIssue { title body }
            }
        }
    }
}"#;

/// An item linked into a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    /// Opaque item id
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ProjectItemType,
    /// The linked content; null when the server redacts it.
    pub content: Option<ItemContent>,
}

impl ProjectItem {
    /// Title of the linked content, if visible.
    pub fn title(&self) -> Option<&str> {
        match &self.content {
            Some(ItemContent::Issue(c)) | Some(ItemContent::PullRequest(c)) => Some(&c.title),
            Some(ItemContent::DraftIssue(d)) => Some(&d.title),
            None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectItemType {
    Issue,
    PullRequest,
    DraftIssue,
    Redacted,
}

/// Content behind an item, tagged by GraphQL `__typename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum ItemContent {
    Issue(RepositoryContent),
    PullRequest(RepositoryContent),
    DraftIssue(DraftIssueContent),
}

/// Fields shared by issues and pull requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryContent {
    pub title: String,
    pub number: u64,
    pub url: String,
    #[serde(default)]
    pub body: String,
    pub repository: Repository,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name_with_owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftIssueContent {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddItemData {
    add_project_v2_item_by_id: Option<AddItemPayload>,
}

#[derive(Deserialize)]
struct AddItemPayload {
    item: Option<ProjectItem>,
}

/// Link content `content_id` into project `project_id` with one write request.
///
/// Sends exactly `{"projectId": .., "contentId": ..}` as variables.
///
/// # Errors
///
/// - `Validation` if either id is empty (no request is made)
/// - `Upstream` with the server's message if the mutation is rejected, or if
///   the response carries no item
/// - `Transport` on connectivity or credential failure
pub async fn add_project_item(
    client: &dyn GraphQlClient,
    project_id: &str,
    content_id: &ContentId,
) -> Result<ProjectItem, ItemAddError> {
    if project_id.is_empty() {
        return Err(ItemAddError::Validation("project id is empty".into()));
    }
    if content_id.as_str().is_empty() {
        return Err(ItemAddError::Validation("content id is empty".into()));
    }

    let data: AddItemData = execute_mutation(
        client,
        ADD_ITEM_OPERATION,
        ADD_ITEM_MUTATION,
        json!({ "projectId": project_id, "contentId": content_id.as_str() }),
    )
    .await
    .map_err(ItemAddError::from_mutation)?;

    let item = data
        .add_project_v2_item_by_id
        .and_then(|p| p.item)
        .ok_or_else(|| ItemAddError::Upstream("server returned no item".into()))?;

    debug!(item = %item.id, "added project item");
    Ok(item)
}
