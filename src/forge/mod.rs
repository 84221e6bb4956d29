//! forge
//!
//! Abstraction over the remote GraphQL API.
//!
//! # Architecture
//!
//! The `GraphQlClient` trait is the one seam between the resolution pipeline
//! and the network. Resolvers and the mutation executor only ever see
//! `&dyn GraphQlClient`; the binary wires in [`github::GitHubGraphQlClient`],
//! tests wire in [`mock::MockGraphQlClient`].
//!
//! # Modules
//!
//! - `traits`: `GraphQlClient` trait, `ForgeError`, typed decode helpers
//! - [`github`]: GitHub implementation over reqwest
//! - [`mock`]: Mock implementation for deterministic testing

pub mod github;
pub mod mock;
mod traits;

pub use traits::*;
