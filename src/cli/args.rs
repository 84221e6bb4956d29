//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--hostname <HOST>`: GitHub host (also `GH_HOST`)

use clap::{Parser, Subcommand, ValueEnum};

/// itemlink - add issues and pull requests to GitHub projects
#[derive(Parser, Debug)]
#[command(name = "itemlink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// GitHub host to talk to (defaults to config, then github.com)
    #[arg(long, global = true, env = "GH_HOST")]
    pub hostname: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Machine-readable output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add an issue or pull request to a project
    #[command(
        name = "item-add",
        long_about = "Add an issue or pull request to a project.\n\n\
            The project is identified by its number and owner. Without --user or \
            --org the project belongs to the authenticated user.",
        after_help = "\
EXAMPLES:
    # Add an issue to the current user's project 1
    itemlink item-add 1 --user \"@me\" --url https://github.com/monalisa/myproject/issues/23

    # Add a pull request to an organization project, printing the item as JSON
    itemlink item-add 4 --org octo-org --url https://github.com/octo-org/app/pull/7 --format json"
    )]
    ItemAdd {
        /// Project number
        number: Option<String>,

        /// Login of the user owning the project. Use "@me" for the current user
        #[arg(long)]
        user: Option<String>,

        /// Login of the organization owning the project
        #[arg(long)]
        org: Option<String>,

        /// URL of the issue or pull request to add
        #[arg(long)]
        url: Option<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Configure authentication for the GitHub API
    #[command(
        name = "auth",
        long_about = "Store a personal access token for the GitHub API.\n\n\
            The token is kept in the local secret store, keyed by host. GH_TOKEN and \
            GITHUB_TOKEN take precedence over a stored token when set.",
        after_help = "\
EXAMPLES:
    # Prompt for a token (input is hidden)
    itemlink auth

    # Store a token non-interactively
    itemlink auth --token ghp_xxxx

    # Check if you're authenticated
    itemlink auth --status

    # Remove the stored token
    itemlink --hostname ghe.example.com auth --logout"
    )]
    Auth {
        /// Token to store (prompts when omitted)
        #[arg(long)]
        token: Option<String>,

        /// Show current authentication status
        #[arg(long, conflicts_with_all = ["token", "logout"])]
        status: bool,

        /// Remove stored authentication
        #[arg(long, conflicts_with = "token")]
        logout: bool,
    },
}
