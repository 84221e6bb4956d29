//! projects::project
//!
//! Project resolution: owner + number to project id.
//!
//! A project that does not exist and one the caller cannot read produce the
//! same `NotFound` error.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::core::errors::ItemAddError;
use crate::core::types::{Owner, OwnerKind, Project, ProjectNumber};
use crate::forge::{execute_query, GraphQlClient};

const USER_PROJECT_QUERY: &str = r#"query UserProject($login: String!, $number: Int!) {
    owner: user(login: $login) {
        projectV2(number: $number) { id number title url closed }
    }
}"#;

const ORG_PROJECT_QUERY: &str = r#"query OrgProject($login: String!, $number: Int!) {
    owner: organization(login: $login) {
        projectV2(number: $number) { id number title url closed }
    }
}"#;

#[derive(Deserialize)]
struct ProjectData {
    owner: Option<ProjectOwner>,
}

#[derive(Deserialize)]
struct ProjectOwner {
    #[serde(rename = "projectV2")]
    project_v2: Option<ProjectNode>,
}

#[derive(Deserialize)]
struct ProjectNode {
    id: String,
    number: i32,
    title: String,
    url: String,
    #[serde(default)]
    closed: bool,
}

/// Resolve project `number` under `owner` with one read request.
///
/// # Errors
///
/// - `NotFound` if the owner has no such project or the caller cannot read it
/// - `Transport` on connectivity or credential failure
pub async fn resolve_project(
    client: &dyn GraphQlClient,
    owner: &Owner,
    number: ProjectNumber,
) -> Result<Project, ItemAddError> {
    let what = format!("project {} for owner '{}'", number, owner.login);
    let (operation, document) = match owner.kind {
        OwnerKind::User => ("UserProject", USER_PROJECT_QUERY),
        OwnerKind::Organization => ("OrgProject", ORG_PROJECT_QUERY),
    };

    let data: ProjectData = execute_query(
        client,
        operation,
        document,
        json!({ "login": owner.login, "number": number.get() }),
    )
    .await
    .map_err(|e| ItemAddError::from_lookup(e, &what))?;

    let node = data
        .owner
        .and_then(|o| o.project_v2)
        .ok_or_else(|| ItemAddError::NotFound(format!("could not find {}", what)))?;

    debug!(project = %node.title, id = %node.id, closed = node.closed, "resolved project");

    Ok(Project {
        id: node.id,
        number: ProjectNumber::new(node.number).unwrap_or(number),
        title: node.title,
        url: node.url,
        closed: node.closed,
        owner_login: owner.login.clone(),
    })
}
