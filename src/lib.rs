// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # doc2struct
//!
//! Turns markdown REST API reference pages into typed record definitions.
//!
//! ## Features
//!
//! - **Table Extraction**: finds `###### Foo Structure` field tables and their rows
//! - **Type Inference**: maps prose type phrases ("array of snowflakes") to types
//! - **Rendering**: emits Go structs with `json` tags or Rust serde structs
//! - **GitHub Fetching**: pulls the docs through the contents API with rate limiting
//!
//! ## Quick Start
//!
//! ```rust
//! use doc2struct::generate::render_document;
//! use doc2struct::render::GoRenderer;
//!
//! let doc = [
//!     "https://discord.com/developers/docs/resources/user",
//!     "###### User Structure",
//!     "| Field | Type | Description |",
//!     "|---|---|---|",
//!     "| id | snowflake | the user's id |",
//! ]
//! .join("\n");
//!
//! let go = render_document(&doc, &GoRenderer, "eventide").unwrap();
//! assert!(go.contains("ID string `json:\"id\"`"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! GitHub contents API ──► fetch ──► store (md/)
//!                                      │
//!                 markdown::TableScanner ◄┘
//!                         │  Table rows
//!                 schema::TypeInferrer
//!                         │  RecordModel
//!                 render::{GoRenderer, RustRenderer} ──► store (go/ | rust/)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Shared enums
pub mod types;

/// Record model, naming and type inference
pub mod schema;

/// Markdown table extraction
pub mod markdown;

/// Target-language renderers
pub mod render;

/// Extraction plus rendering per document
pub mod generate;

/// HTTP client with retry and rate limiting
pub mod http;

/// Documentation sources
pub mod fetch;

/// On-disk layout
pub mod store;

/// Configuration file
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::Config;
pub use error::{Error, Result};
pub use generate::{parse_document, render_document};
pub use schema::{Field, RecordModel, TypeDescriptor};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
