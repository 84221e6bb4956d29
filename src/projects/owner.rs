//! projects::owner
//!
//! Owner resolution: login (or the viewer) to server id.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::core::errors::ItemAddError;
use crate::core::types::{Owner, OwnerKind, OwnerSelector};
use crate::forge::{execute_query, GraphQlClient};

const VIEWER_QUERY: &str = r#"query ViewerOwner {
    viewer { id login }
}"#;

const USER_QUERY: &str = r#"query UserOwner($login: String!) {
    user(login: $login) { id login }
}"#;

const ORG_QUERY: &str = r#"query OrgOwner($login: String!) {
    organization(login: $login) { id login }
}"#;

#[derive(Deserialize)]
struct OwnerNode {
    id: String,
    login: String,
}

#[derive(Deserialize)]
struct ViewerData {
    viewer: OwnerNode,
}

#[derive(Deserialize)]
struct UserData {
    user: Option<OwnerNode>,
}

#[derive(Deserialize)]
struct OrgData {
    organization: Option<OwnerNode>,
}

/// Resolve `selector` to an owner with one read request.
///
/// The viewer resolves to an owner of kind `User`.
///
/// # Errors
///
/// - `NotFound` if the login does not resolve to an accessible owner
/// - `Transport` on connectivity or credential failure
pub async fn resolve_owner(
    client: &dyn GraphQlClient,
    selector: &OwnerSelector,
) -> Result<Owner, ItemAddError> {
    let what = selector.to_string();
    let lookup = |e| ItemAddError::from_lookup(e, &what);

    let (node, kind) = match selector {
        OwnerSelector::Viewer => {
            let data: ViewerData = execute_query(client, "ViewerOwner", VIEWER_QUERY, json!({}))
                .await
                .map_err(lookup)?;
            (Some(data.viewer), OwnerKind::User)
        }
        OwnerSelector::User(login) => {
            let data: UserData =
                execute_query(client, "UserOwner", USER_QUERY, json!({ "login": login }))
                    .await
                    .map_err(lookup)?;
            (data.user, OwnerKind::User)
        }
        OwnerSelector::Organization(login) => {
            let data: OrgData =
                execute_query(client, "OrgOwner", ORG_QUERY, json!({ "login": login }))
                    .await
                    .map_err(lookup)?;
            (data.organization, OwnerKind::Organization)
        }
    };

    let node = node.ok_or_else(|| ItemAddError::NotFound(format!("could not find {}", what)))?;
    debug!(owner = %node.login, id = %node.id, %kind, "resolved owner");

    Ok(Owner {
        id: node.id,
        login: node.login,
        kind,
    })
}
