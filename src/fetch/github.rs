//! GitHub contents API fetcher

use super::types::{FileContents, FilePreview, SourceDocument};
use super::DocumentSource;
use crate::config::Config;
use crate::error::Result;
use crate::http::HttpClient;
use crate::schema::naming;
use async_trait::async_trait;
use futures::{stream, StreamExt, TryStreamExt};
use tracing::{debug, info};

/// Fetches markdown documents from a GitHub repository directory
#[derive(Debug)]
pub struct GitHubFetcher {
    client: HttpClient,
    source_url: String,
    docs_url: String,
    ignore_dirs: Vec<String>,
    concurrency: usize,
}

impl GitHubFetcher {
    /// Fetch the directory listing at `source_url`, linking documents under `docs_url`
    pub fn new(client: HttpClient, source_url: impl Into<String>, docs_url: impl Into<String>) -> Self {
        Self {
            client,
            source_url: source_url.into(),
            docs_url: docs_url.into(),
            ignore_dirs: Vec::new(),
            concurrency: 8,
        }
    }

    /// Build a fetcher (and its HTTP client) from the runtime config
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = HttpClient::with_config(config.http_client_config())?;
        Ok(Self::new(client, &config.source_url, &config.docs_url)
            .ignore_dirs(config.ignore_dirs.clone())
            .concurrency(config.concurrency))
    }

    /// Directories to skip, compared case-insensitively
    #[must_use]
    pub fn ignore_dirs(mut self, dirs: Vec<String>) -> Self {
        self.ignore_dirs = dirs;
        self
    }

    /// Maximum parallel downloads
    #[must_use]
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    fn is_ignored(&self, dir: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d.eq_ignore_ascii_case(dir))
    }

    /// Public page URL for a file: docs root, repository directory, and the
    /// kebab-cased file stem.
    pub fn document_url(&self, file: &FilePreview) -> String {
        let dir = file.path.rsplit_once('/').map_or(".", |(dir, _)| dir);
        let stem = file.name.strip_suffix(".md").unwrap_or(&file.name);
        format!("{}{}/{}", self.docs_url, dir, naming::kebab(stem))
    }

    /// Markdown files of every directory that is not ignored
    async fn list_markdown_files(&self) -> Result<Vec<FilePreview>> {
        let entries: Vec<FilePreview> = self.client.get_json(&self.source_url).await?;

        let mut files = Vec::new();
        for dir in entries.iter().filter(|e| e.is_dir()) {
            if self.is_ignored(&dir.name) {
                debug!("Skipping ignored directory {}", dir.name);
                continue;
            }
            let listing: Vec<FilePreview> = self.client.get_json(&dir.url).await?;
            files.extend(listing.into_iter().filter(FilePreview::is_markdown_file));
        }
        Ok(files)
    }

    async fn fetch_document(&self, file: FilePreview) -> Result<SourceDocument> {
        let contents: FileContents = self.client.get_json(&file.url).await?;
        let markdown = contents.decode(&file.name)?;
        info!("fetched {}", file.name);

        let url = self.document_url(&file);
        Ok(SourceDocument::new(file.name, url, markdown))
    }
}

#[async_trait]
impl DocumentSource for GitHubFetcher {
    async fn fetch_documents(&self) -> Result<Vec<SourceDocument>> {
        let files = self.list_markdown_files().await?;
        debug!("Downloading {} markdown files", files.len());

        let mut documents: Vec<SourceDocument> = stream::iter(files)
            .map(|file| self.fetch_document(file))
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await?;

        documents.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(documents)
    }
}
