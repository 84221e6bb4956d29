//! cli::commands::item_add
//!
//! Add an issue or pull request to a project.
//!
//! Flags are validated before the client is used. A flag problem never
//! costs a request.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::debug;

use super::Context;
use crate::auth::StoredTokenProvider;
use crate::forge::github::GitHubGraphQlClient;
use crate::forge::GraphQlClient;
use crate::projects::{add_item, AddItemFlags, AddItemOptions};
use crate::secrets;
use crate::ui::render::render_item;

/// Run the item-add command.
pub fn item_add(ctx: &Context, flags: &AddItemFlags<'_>) -> Result<()> {
    let store = secrets::create_store(ctx.config.secrets_provider())
        .context("failed to initialize secret store")?;
    let provider = Arc::new(StoredTokenProvider::from_env(&ctx.host, store));
    let client =
        GitHubGraphQlClient::new_with_provider(provider, ctx.config.graphql_endpoint(&ctx.host));
    debug!(endpoint = client.endpoint(), "using GraphQL endpoint");

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    run_item_add(&client, flags, &ctx.host, &mut stdout.lock(), is_tty)
}

/// Validate `flags` for `host`, add the item through `client` and render it
/// to `out`.
///
/// Nothing is written to `out` unless the mutation succeeds.
pub fn run_item_add<W: Write>(
    client: &dyn GraphQlClient,
    flags: &AddItemFlags<'_>,
    host: &str,
    out: &mut W,
    is_tty: bool,
) -> Result<()> {
    let options = AddItemOptions::from_flags(flags, host)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let item = rt
        .block_on(add_item(client, &options))
        .inspect_err(|e| debug!(kind = e.kind(), "item-add failed"))?;

    render_item(&item, options.format, out, is_tty)?;
    Ok(())
}
