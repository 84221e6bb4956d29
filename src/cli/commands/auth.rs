//! cli::commands::auth
//!
//! Store, inspect, or remove the API token for a host.
//!
//! The token itself is never printed. `--status` only reports whether one
//! exists and where it would come from.
//!
//! # Example
//!
//! ```bash
//! # Interactive (prompts for token)
//! itemlink auth
//!
//! # Non-interactive
//! itemlink auth --token ghp_xxxx
//!
//! # Check status
//! itemlink auth --status
//!
//! # Remove stored token
//! itemlink auth --logout
//! ```

use std::io::{self, IsTerminal, Write};

use anyhow::{bail, Context as _, Result};

use super::Context;
use crate::auth::{env_token, StoredTokenProvider, TokenProvider};
use crate::secrets::{self, token_key, SecretStore};
use crate::ui::output::{self, Verbosity};

/// Run the auth command.
pub fn auth(ctx: &Context, token: Option<&str>, status: bool, logout: bool) -> Result<()> {
    let store = secrets::create_store(ctx.config.secrets_provider())
        .context("failed to initialize secret store")?;

    if status {
        let provider = StoredTokenProvider::from_env(&ctx.host, store);
        return show_status(&provider, ctx.verbosity, &mut io::stdout().lock());
    }

    if logout {
        return do_logout(store.as_ref(), &ctx.host, ctx.verbosity);
    }

    let token_value = get_token(ctx, token)?;
    validate_token(&token_value)?;

    store
        .set(&token_key(&ctx.host), &token_value)
        .context("failed to store token")?;

    output::print(
        format!("Authentication configured for {}.", ctx.host),
        ctx.verbosity,
    );
    if env_token().is_some() {
        output::warn(
            "GH_TOKEN or GITHUB_TOKEN is set and takes precedence over the stored token",
            ctx.verbosity,
        );
    }

    Ok(())
}

/// Report where the next request's token would come from.
fn show_status<W: Write>(
    provider: &StoredTokenProvider,
    verbosity: Verbosity,
    out: &mut W,
) -> Result<()> {
    let host = provider.host();
    let authenticated = provider.is_authenticated();

    if verbosity.is_quiet() {
        // Machine-readable output
        let state = if authenticated {
            "authenticated"
        } else {
            "not_authenticated"
        };
        writeln!(out, "{}", state)?;
    } else if provider.uses_env_token() {
        writeln!(out, "Authenticated with {} (token from environment).", host)?;
    } else if authenticated {
        writeln!(out, "Authenticated with {}.", host)?;
    } else {
        writeln!(out, "Not authenticated with {}.", host)?;
        writeln!(out, "Run 'itemlink auth' or set GH_TOKEN.")?;
    }

    Ok(())
}

fn do_logout(store: &dyn SecretStore, host: &str, verbosity: Verbosity) -> Result<()> {
    store
        .delete(&token_key(host))
        .context("failed to remove stored token")?;

    output::print(format!("Logged out from {}.", host), verbosity);
    Ok(())
}

/// Token from `--token`, or a masked prompt when stdin is a terminal.
fn get_token(ctx: &Context, token_arg: Option<&str>) -> Result<String> {
    if let Some(t) = token_arg {
        return Ok(t.trim().to_string());
    }

    if ctx.verbosity.is_quiet() || !io::stdin().is_terminal() {
        bail!("token required. Use --token <TOKEN> or run interactively.");
    }

    eprint!("GitHub personal access token for {}: ", ctx.host);
    io::stderr().flush()?;

    let token = rpassword::read_password().context("failed to read token")?;
    Ok(token.trim().to_string())
}

/// Basic format checks. The token is not checked against the API.
pub fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        bail!("token cannot be empty.");
    }

    if token.len() < 10 {
        bail!("token appears to be too short.");
    }

    if token.contains(char::is_whitespace) {
        bail!("token should not contain whitespace.");
    }

    Ok(())
}
