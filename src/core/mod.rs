//! core
//!
//! Domain types, errors, and configuration.
//!
//! # Modules
//!
//! - [`types`] - Strong types: OwnerSelector, ProjectNumber, ContentUrl, etc.
//! - [`errors`] - The item-add error taxonomy
//! - [`config`] - Configuration schema and loading
//!
//! Types validate on construction, so a value that exists is well formed.

pub mod config;
pub mod errors;
pub mod types;
