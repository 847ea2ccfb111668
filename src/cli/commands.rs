//! CLI commands and argument parsing

use crate::types::Target;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate typed structs from the Discord API documentation
#[derive(Parser, Debug)]
#[command(name = "doc2struct")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON, or YAML by extension); created if missing
    #[arg(short, long, global = true, default_value = "config.json")]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the configured render target
    #[arg(short, long, global = true)]
    pub target: Option<Target>,

    /// GitHub token, overrides the configured one
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Regenerate structs, fetching docs first when needed
    Run {
        /// Fetch new markdown files from GitHub
        #[arg(short, long)]
        fetch: bool,
    },

    /// Replace the stored markdown with a fresh copy from GitHub
    Fetch,

    /// Regenerate structs from the stored markdown
    Generate,

    /// Extract records from a single document and print them
    Parse {
        /// Document whose first line is its source URL
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "code")]
        format: ParseFormat,
    },
}

/// Output of the `parse` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ParseFormat {
    /// Rendered source for the target language
    Code,
    /// Extracted records as JSON
    Json,
}
