//! Documentation sources
//!
//! A [`DocumentSource`] produces the markdown documents that extraction
//! runs over. [`GitHubFetcher`] reads them from the GitHub contents API:
//! directory listings are walked sequentially, file downloads run
//! concurrently under the HTTP client's rate limiter.

mod github;
mod types;

pub use github::GitHubFetcher;
pub use types::{FileContents, FilePreview, SourceDocument};

use crate::error::Result;
use async_trait::async_trait;

/// Anything that can produce documentation files
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch every document, sorted by file name
    async fn fetch_documents(&self) -> Result<Vec<SourceDocument>>;
}
