//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware messages on stdout/stderr
//! - [`table`] - Row/column layout for terminals and pipes
//! - [`render`] - Rendering of a created project item
//!
//! # Design
//!
//! Command results go to stdout; everything else (errors, warnings) goes to
//! stderr so that `--format json` output can be piped.

pub mod output;
pub mod render;
pub mod table;
