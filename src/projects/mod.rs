//! projects
//!
//! Identifier resolution and the add-item mutation for project boards.
//!
//! # Modules
//!
//! - [`owner`] - Login (or viewer) to owner id
//! - [`project`] - Owner + number to project id
//! - [`content`] - Issue/PR URL to content id
//! - [`item`] - The mutation and the item record it returns
//! - [`add_item`] - Flag validation and the end-to-end pipeline
//!
//! Every lookup is one read request against a [`GraphQlClient`]; the
//! mutation is one write request. Nothing is cached or retried.
//!
//! [`GraphQlClient`]: crate::forge::GraphQlClient

pub mod add_item;
pub mod content;
pub mod item;
pub mod owner;
pub mod project;

pub use add_item::{add_item, AddItemFlags, AddItemOptions};
pub use content::resolve_content_id;
pub use item::{add_project_item, ItemContent, ProjectItem, ProjectItemType};
pub use owner::resolve_owner;
pub use project::resolve_project;
