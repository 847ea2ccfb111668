//! CLI module
//!
//! Command-line interface for fetching docs and generating structs.
//!
//! # Commands
//!
//! - `run` - Regenerate, fetching first with `-f` or when the layout is missing
//! - `fetch` - Replace stored markdown with a fresh copy
//! - `generate` - Regenerate from stored markdown
//! - `parse` - Print the structs of one document

mod commands;
mod runner;

pub use commands::{Cli, Commands, ParseFormat};
pub use runner::{fetch_into, Runner};
