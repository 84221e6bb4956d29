//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and pick the host
//! - Delegate to command handlers
//!
//! The CLI layer is thin: handlers build the API client and call into
//! [`crate::projects`], then hand results to [`crate::ui`].

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;

use crate::ui::output::Verbosity;

/// Run a parsed command line.
///
/// This is the main entry point called from `main.rs`, after logging is set up.
pub fn run(cli: Cli) -> Result<()> {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    let ctx = commands::Context::new(verbosity, cli.hostname.as_deref())?;

    commands::dispatch(cli.command, &ctx)
}
