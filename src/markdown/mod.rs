//! Markdown extraction module
//!
//! Locates field tables in API reference pages.
//!
//! # Overview
//!
//! - `normalize` - splits a document into its source URL and clean lines
//! - `TableScanner` - tracks section headings and collects table rows
//! - `Table` - one extracted table, convertible into a `RecordModel`

mod normalize;
mod scanner;
mod types;

pub use normalize::{
    clean_cell, heading_level, heading_title, normalize, remove_hyperlinks, split_row,
};
pub use scanner::{extract_tables, TableScanner, QUALIFYING_WORDS};
pub use types::{Document, RawFieldRow, Table};
