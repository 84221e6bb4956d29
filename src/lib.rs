//! itemlink - add issues and pull requests to GitHub projects
//!
//! `itemlink item-add` links an existing issue or pull request to a
//! GitHub Projects (v2) board owned by a user, an organization, or the
//! authenticated viewer.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, dispatches)
//! - [`projects`] - The item-add pipeline: owner, project and content lookups, then the mutation
//! - [`core`] - Domain types, errors, and configuration
//! - [`forge`] - GraphQL client trait, the GitHub client, and a recording mock
//! - [`auth`] - Bearer tokens from the environment or the secret store
//! - [`secrets`] - Secret storage abstraction
//! - [`ui`] - Rendering and user-facing messages
//!
//! # Guarantees
//!
//! 1. Flags are validated before the first request
//! 2. Lookups run in a fixed order and the first failure stops the run
//! 3. At most one mutation is sent per invocation, and nothing is retried
//! 4. Output is written only after the mutation succeeds

pub mod auth;
pub mod cli;
pub mod core;
pub mod forge;
pub mod projects;
pub mod secrets;
pub mod ui;
