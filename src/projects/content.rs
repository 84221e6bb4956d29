//! projects::content
//!
//! Content resolution: issue/PR URL to content id.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::core::errors::ItemAddError;
use crate::core::types::{ContentId, ContentUrl};
use crate::forge::{execute_query, GraphQlClient};

const CONTENT_QUERY: &str = r#"query ContentId($url: URI!) {
    resource(url: $url) {
        __typename
        ... on Issue { id }
        ... on PullRequest { id }
    }
}"#;

#[derive(Deserialize)]
struct ResourceData {
    resource: Option<Resource>,
}

#[derive(Deserialize)]
#[serde(tag = "__typename")]
enum Resource {
    Issue { id: String },
    PullRequest { id: String },
    #[serde(other)]
    Other,
}

/// Resolve `url` to the id of the issue or pull request it addresses.
///
/// The URL shape was already checked when `url` was parsed; this only
/// performs the lookup.
///
/// # Errors
///
/// - `NotFound` if nothing accessible lives at the URL, or it is not an
///   issue or pull request
/// - `Transport` on connectivity or credential failure
pub async fn resolve_content_id(
    client: &dyn GraphQlClient,
    url: &ContentUrl,
) -> Result<ContentId, ItemAddError> {
    let what = format!("{} at '{}'", url.kind(), url);

    let data: ResourceData = execute_query(
        client,
        "ContentId",
        CONTENT_QUERY,
        json!({ "url": url.as_str() }),
    )
    .await
    .map_err(|e| ItemAddError::from_lookup(e, &what))?;

    let id = match data.resource {
        Some(Resource::Issue { id }) | Some(Resource::PullRequest { id }) => id,
        Some(Resource::Other) | None => {
            return Err(ItemAddError::NotFound(format!("could not find {}", what)))
        }
    };

    debug!(%url, %id, "resolved content");
    Ok(ContentId::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::mock::MockGraphQlClient;

    fn issue_url() -> ContentUrl {
        ContentUrl::parse("https://github.com/monalisa/myproject/issues/23", "github.com").unwrap()
    }

    #[tokio::test]
    async fn resolves_issue() {
        let client = MockGraphQlClient::new();
        client.respond(
            "ContentId",
            json!({"resource": {"__typename": "Issue", "id": "I_23"}}),
        );

        let id = resolve_content_id(&client, &issue_url()).await.unwrap();
        assert_eq!(id.as_str(), "I_23");
        assert_eq!(
            client.operations()[0].variables,
            json!({"url": "https://github.com/monalisa/myproject/issues/23"})
        );
    }

    #[tokio::test]
    async fn resolves_pull_request() {
        let client = MockGraphQlClient::new();
        client.respond(
            "ContentId",
            json!({"resource": {"__typename": "PullRequest", "id": "PR_7"}}),
        );

        let url = ContentUrl::parse("https://github.com/o/r/pull/7", "github.com").unwrap();
        let id = resolve_content_id(&client, &url).await.unwrap();
        assert_eq!(id.as_str(), "PR_7");
    }

    #[tokio::test]
    async fn null_resource_is_not_found() {
        let client = MockGraphQlClient::new();
        client.respond("ContentId", json!({"resource": null}));

        let err = resolve_content_id(&client, &issue_url()).await.unwrap_err();
        assert!(matches!(err, ItemAddError::NotFound(_)));
        assert!(err.to_string().contains("issues/23"));
    }

    #[tokio::test]
    async fn other_resource_type_is_not_found() {
        let client = MockGraphQlClient::new();
        client.respond(
            "ContentId",
            json!({"resource": {"__typename": "Repository"}}),
        );

        let err = resolve_content_id(&client, &issue_url()).await.unwrap_err();
        assert!(matches!(err, ItemAddError::NotFound(_)));
    }
}
