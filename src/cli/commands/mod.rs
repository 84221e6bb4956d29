//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Builds what it needs (secret store, API client, runtime)
//! 3. Formats and displays output
//!
//! # Async Commands
//!
//! API calls are async. Handlers that make them build a current-thread
//! tokio runtime and `block_on` the work, so the rest of the CLI stays sync.

mod auth;
mod item_add;

pub use auth::{auth, validate_token};
pub use item_add::{item_add, run_item_add};

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::cli::args::{Command, FormatArg};
use crate::core::config::{schema::validate_hostname, Config};
use crate::projects::AddItemFlags;
use crate::ui::output::Verbosity;

/// Shared state for command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    pub verbosity: Verbosity,
    /// Host all API calls go to
    pub host: String,
    pub config: Config,
}

impl Context {
    /// Load config and resolve the host: flag (or `GH_HOST`), then config,
    /// then `github.com`.
    pub fn new(verbosity: Verbosity, hostname_flag: Option<&str>) -> Result<Self> {
        let config = Config::load().context("failed to load configuration")?;
        Self::with_config(verbosity, hostname_flag, config)
    }

    /// Like [`Context::new`] with an already loaded config.
    pub fn with_config(
        verbosity: Verbosity,
        hostname_flag: Option<&str>,
        config: Config,
    ) -> Result<Self> {
        let host = match hostname_flag.filter(|h| !h.is_empty()) {
            Some(flag) => {
                validate_hostname(flag).context("invalid --hostname")?;
                flag.to_lowercase()
            }
            None => config.hostname().to_lowercase(),
        };

        debug!(%host, config = ?config.loaded_from(), "context ready");

        Ok(Self {
            verbosity,
            host,
            config,
        })
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::ItemAdd {
            number,
            user,
            org,
            url,
            format,
        } => {
            let flags = AddItemFlags {
                user: user.as_deref(),
                org: org.as_deref(),
                number: number.as_deref(),
                url: url.as_deref(),
                json: format == Some(FormatArg::Json),
            };
            item_add(ctx, &flags)
        }
        Command::Auth {
            token,
            status,
            logout,
        } => auth(ctx, token.as_deref(), status, logout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_host(host: &str) -> Config {
        let mut config = Config::default();
        config.global.hostname = Some(host.to_string());
        config
    }

    #[test]
    fn flag_wins_over_config() {
        let ctx = Context::with_config(
            Verbosity::Normal,
            Some("GHE.Example.com"),
            config_with_host("other.example.com"),
        )
        .unwrap();
        assert_eq!(ctx.host, "ghe.example.com");
    }

    #[test]
    fn config_used_without_flag() {
        let ctx =
            Context::with_config(Verbosity::Normal, None, config_with_host("ghe.example.com"))
                .unwrap();
        assert_eq!(ctx.host, "ghe.example.com");
    }

    #[test]
    fn defaults_to_github() {
        let ctx = Context::with_config(Verbosity::Quiet, Some(""), Config::default()).unwrap();
        assert_eq!(ctx.host, "github.com");
    }

    #[test]
    fn rejects_url_as_hostname() {
        let err = Context::with_config(
            Verbosity::Normal,
            Some("https://github.com"),
            Config::default(),
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("--hostname"));
    }
}
