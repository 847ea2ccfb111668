//! Common types used throughout doc2struct
//!
//! Shared enums used by the configuration, the HTTP client and the CLI.

use serde::{Deserialize, Serialize};

// ============================================================================
// Render Target
// ============================================================================

/// Language the extracted records are rendered into
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Go structs with `json` tags
    #[default]
    Go,
    /// Rust structs with serde attributes
    Rust,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Go => write!(f, "go"),
            Target::Rust => write!(f, "rust"),
        }
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}
