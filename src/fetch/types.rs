//! Fetch types
//!
//! Wire types of the GitHub contents API and the documents handed to the
//! extraction pipeline.

use crate::error::{Error, Result};
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// One entry of a contents API directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePreview {
    pub name: String,

    /// `"dir"` or `"file"` (also `"symlink"`, `"submodule"`)
    #[serde(rename = "type")]
    pub entry_type: String,

    /// API URL of the entry
    pub url: String,

    /// Repository path, e.g. `docs/resources/User.md`
    #[serde(default)]
    pub path: String,
}

impl FilePreview {
    pub fn is_dir(&self) -> bool {
        self.entry_type == "dir"
    }

    /// A regular file with an `.md` extension
    pub fn is_markdown_file(&self) -> bool {
        self.entry_type == "file"
            && std::path::Path::new(&self.name)
                .extension()
                .is_some_and(|ext| ext == "md")
    }
}

/// Contents API response for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContents {
    pub content: String,
    pub encoding: String,
}

impl FileContents {
    /// Decode the base64 payload. The API wraps it at 60 columns, so
    /// embedded whitespace is dropped first.
    pub fn decode(&self, file: &str) -> Result<String> {
        if self.encoding != "base64" {
            return Err(Error::UnsupportedEncoding {
                file: file.to_string(),
                encoding: self.encoding.clone(),
            });
        }

        let compact: String = self
            .content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(compact)
            .map_err(|e| Error::decode(file, e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| Error::decode(file, e.to_string()))
    }
}

/// A fetched markdown document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Original file name, e.g. `User.md`
    pub file_name: String,

    /// Public URL of the rendered documentation page
    pub url: String,

    pub markdown: String,
}

impl SourceDocument {
    pub fn new(
        file_name: impl Into<String>,
        url: impl Into<String>,
        markdown: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            url: url.into(),
            markdown: markdown.into(),
        }
    }

    /// Text as consumed by extraction: the URL line, then the markdown
    pub fn to_text(&self) -> String {
        format!("{}\n{}", self.url, self.markdown)
    }
}
