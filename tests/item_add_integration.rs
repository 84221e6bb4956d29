//! Integration tests for the item-add pipeline.
//!
//! The pipeline runs against `MockGraphQlClient`, which records every
//! operation, so these tests check both results and exactly what was sent.

use serde_json::{json, Value};

use itemlink::cli::commands::run_item_add;
use itemlink::core::errors::ItemAddError;
use itemlink::core::types::OutputFormat;
use itemlink::forge::mock::{MockGraphQlClient, OperationKind};
use itemlink::forge::{ForgeError, GraphQlError};
use itemlink::projects::{add_item, AddItemFlags, AddItemOptions, ItemContent, ProjectItem};
use itemlink::ui::render::render_item;

const ISSUE_URL: &str = "https://github.com/monalisa/myproject/issues/23";

// =============================================================================
// Fixtures
// =============================================================================

fn item_json() -> Value {
    json!({
        "id": "PVTI_lADOANN5s84ACbL0zgBueEI",
        "type": "ISSUE",
        "content": {
            "__typename": "Issue",
            "title": "Broken login",
            "number": 23,
            "url": ISSUE_URL,
            "body": "Steps to reproduce",
            "repository": {"nameWithOwner": "monalisa/myproject"}
        }
    })
}

/// A client scripted for project `PID` and content `CID`.
fn scripted_client() -> MockGraphQlClient {
    let client = MockGraphQlClient::new();
    client.respond(
        "ViewerOwner",
        json!({"viewer": {"id": "U_me", "login": "monalisa"}}),
    );
    client.respond(
        "UserOwner",
        json!({"user": {"id": "U_me", "login": "monalisa"}}),
    );
    client.respond(
        "OrgOwner",
        json!({"organization": {"id": "O_1", "login": "octo-org"}}),
    );
    for op in ["UserProject", "OrgProject"] {
        client.respond(
            op,
            json!({"owner": {"projectV2": {
                "id": "PID",
                "number": 1,
                "title": "Roadmap",
                "url": "https://github.com/users/monalisa/projects/1",
                "closed": false
            }}}),
        );
    }
    client.respond(
        "ContentId",
        json!({"resource": {"__typename": "Issue", "id": "CID"}}),
    );
    client.respond(
        "AddItem",
        json!({"addProjectV2ItemById": {"item": item_json()}}),
    );
    client
}

fn options(flags: AddItemFlags<'_>) -> Result<AddItemOptions, ItemAddError> {
    AddItemOptions::from_flags(&flags, "github.com")
}

fn base_flags<'a>() -> AddItemFlags<'a> {
    AddItemFlags {
        user: Some("@me"),
        number: Some("1"),
        url: Some(ISSUE_URL),
        ..Default::default()
    }
}

fn render(item: &ProjectItem, format: OutputFormat) -> String {
    let mut out = Vec::new();
    render_item(item, format, &mut out, false).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// Happy path
// =============================================================================

#[tokio::test]
async fn links_content_to_project() {
    let client = scripted_client();
    let opts = options(base_flags()).unwrap();

    let item = add_item(&client, &opts).await.unwrap();

    let mutations = client.operations_of(OperationKind::Mutation);
    assert_eq!(mutations.len(), 1);
    assert_eq!(
        mutations[0].variables,
        json!({"projectId": "PID", "contentId": "CID"})
    );
    assert_eq!(render(&item, OutputFormat::Text), "Added item\n");
}

#[tokio::test]
async fn lookups_run_in_order() {
    let client = scripted_client();
    let opts = options(AddItemFlags {
        user: None,
        org: Some("octo-org"),
        ..base_flags()
    })
    .unwrap();

    add_item(&client, &opts).await.unwrap();

    assert_eq!(
        client.operation_names(),
        vec!["OrgOwner", "OrgProject", "ContentId", "AddItem"]
    );
    let ops = client.operations();
    assert_eq!(ops[1].variables, json!({"login": "octo-org", "number": 1}));
    assert_eq!(ops[2].variables, json!({"url": ISSUE_URL}));
}

#[tokio::test]
async fn at_me_resolves_viewer() {
    let client = scripted_client();
    add_item(&client, &options(base_flags()).unwrap())
        .await
        .unwrap();
    assert_eq!(client.operation_names()[0], "ViewerOwner");
}

#[tokio::test]
async fn json_output_matches_server_item() {
    let client = scripted_client();
    let opts = options(AddItemFlags {
        json: true,
        ..base_flags()
    })
    .unwrap();

    let item = add_item(&client, &opts).await.unwrap();
    let text = render(&item, opts.format);

    let printed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(printed, item_json());

    let decoded: ProjectItem = serde_json::from_str(&text).unwrap();
    assert!(matches!(decoded.content, Some(ItemContent::Issue(_))));
    assert_eq!(decoded.title(), Some("Broken login"));
}

#[tokio::test]
async fn project_resolution_is_stable() {
    let client = scripted_client();
    let opts = options(base_flags()).unwrap();

    add_item(&client, &opts).await.unwrap();
    add_item(&client, &opts).await.unwrap();

    let ids: Vec<Value> = client
        .operations_of(OperationKind::Mutation)
        .into_iter()
        .map(|op| op.variables["projectId"].clone())
        .collect();
    assert_eq!(ids, vec![json!("PID"), json!("PID")]);
}

#[tokio::test]
async fn repeated_invocations_each_send_a_mutation() {
    let client = scripted_client();
    let opts = options(base_flags()).unwrap();

    let first = add_item(&client, &opts).await.unwrap();
    let second = add_item(&client, &opts).await.unwrap();

    assert_eq!(client.operations_of(OperationKind::Mutation).len(), 2);
    assert_eq!(first, second);
}

/// Run the whole command against `client`, returning what it wrote.
fn run(client: &MockGraphQlClient, flags: AddItemFlags<'_>) -> (anyhow::Result<()>, String) {
    let mut out = Vec::new();
    let result = run_item_add(client, &flags, "github.com", &mut out, false);
    (result, String::from_utf8(out).unwrap())
}

fn item_add_error(err: &anyhow::Error) -> &ItemAddError {
    err.downcast_ref::<ItemAddError>()
        .expect("error should be an ItemAddError")
}

#[test]
fn full_command_renders_added_item() {
    let client = scripted_client();

    let (result, out) = run(&client, base_flags());

    result.unwrap();
    assert_eq!(out, "Added item\n");
    assert_eq!(
        client.operation_names(),
        vec!["ViewerOwner", "UserProject", "ContentId", "AddItem"]
    );
}

// =============================================================================
// Failures before the network
// =============================================================================

#[test]
fn user_and_org_together_sends_nothing() {
    let client = scripted_client();

    let (result, out) = run(
        &client,
        AddItemFlags {
            user: Some("monalisa"),
            org: Some("octo-org"),
            ..base_flags()
        },
    );

    let err = result.unwrap_err();
    assert!(matches!(item_add_error(&err), ItemAddError::Configuration(_)));
    assert!(err.to_string().contains("--user"));
    assert!(client.operations().is_empty());
    assert!(out.is_empty());
}

#[test]
fn malformed_url_sends_nothing() {
    let client = scripted_client();

    for url in [
        "not a url",
        "https://github.com/monalisa",
        "https://github.com/monalisa/myproject/wiki/Home",
        "https://gitlab.com/monalisa/myproject/issues/23",
    ] {
        let (result, out) = run(
            &client,
            AddItemFlags {
                url: Some(url),
                ..base_flags()
            },
        );
        let err = result.unwrap_err();
        assert!(matches!(item_add_error(&err), ItemAddError::Validation(_)), "{}", url);
        assert!(out.is_empty());
    }
    assert!(client.operations().is_empty());
}

// =============================================================================
// Failures from the server
// =============================================================================

/// A client whose mutation is rejected because the item is already there.
fn already_linked_client() -> MockGraphQlClient {
    let client = MockGraphQlClient::new();
    client.respond(
        "ViewerOwner",
        json!({"viewer": {"id": "U_me", "login": "monalisa"}}),
    );
    client.respond(
        "UserProject",
        json!({"owner": {"projectV2": {
            "id": "PID", "number": 1, "title": "Roadmap",
            "url": "https://github.com/users/monalisa/projects/1", "closed": false
        }}}),
    );
    client.respond(
        "ContentId",
        json!({"resource": {"__typename": "Issue", "id": "CID"}}),
    );
    client.fail(
        "AddItem",
        ForgeError::GraphQl(vec![GraphQlError::new(
            "Content already exists in this project",
            None,
        )]),
    );
    client
}

#[tokio::test]
async fn already_linked_is_upstream_error() {
    let client = already_linked_client();

    let err = add_item(&client, &options(base_flags()).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, ItemAddError::Upstream(_)));
    assert!(err.to_string().contains("already exists"));
    assert_eq!(client.operations_of(OperationKind::Mutation).len(), 1);
}

#[test]
fn already_linked_writes_nothing() {
    let client = already_linked_client();

    let (result, out) = run(&client, base_flags());

    let err = result.unwrap_err();
    assert!(matches!(item_add_error(&err), ItemAddError::Upstream(_)));
    assert!(err.to_string().contains("Content already exists in this project"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn missing_project_stops_before_content_lookup() {
    let client = scripted_client();
    // Queued behind the found project, so it answers from the second run on.
    client.respond("UserProject", json!({"owner": {"projectV2": null}}));
    let opts = options(base_flags()).unwrap();
    add_item(&client, &opts).await.unwrap();
    client.clear_operations();

    let err = add_item(&client, &opts).await.unwrap_err();

    assert!(matches!(err, ItemAddError::NotFound(_)));
    assert_eq!(client.operation_names(), vec!["ViewerOwner", "UserProject"]);
}

#[tokio::test]
async fn inaccessible_content_is_not_found() {
    let client = scripted_client();
    client.fail(
        "ContentId",
        ForgeError::GraphQl(vec![GraphQlError::new(
            "Resource not accessible by integration",
            Some("FORBIDDEN"),
        )]),
    );
    let opts = options(base_flags()).unwrap();
    add_item(&client, &opts).await.unwrap();
    client.clear_operations();

    let err = add_item(&client, &opts).await.unwrap_err();

    assert!(matches!(err, ItemAddError::NotFound(_)));
    assert!(client.operations_of(OperationKind::Mutation).is_empty());
}

#[tokio::test]
async fn transport_failure_is_transport_error() {
    let client = MockGraphQlClient::new();
    client.fail("ViewerOwner", ForgeError::RateLimited);

    let err = add_item(&client, &options(base_flags()).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, ItemAddError::Transport(ForgeError::RateLimited)));
    assert_eq!(client.operations().len(), 1);
}
