//! On-disk layout
//!
//! ```text
//! <out_dir>/
//!   md/       fetched documents, URL line first
//!   go/       generated files (or rust/, per target)
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::fetch::SourceDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory holding fetched markdown
pub const MARKDOWN_DIR: &str = "md";

/// File store rooted at the configured output directory
#[derive(Debug, Clone)]
pub struct DocStore {
    root: PathBuf,
    output_dir: &'static str,
}

impl DocStore {
    /// Store rooted at `root`, writing generated files to `root/<output_dir>`
    pub fn new(root: impl Into<PathBuf>, output_dir: &'static str) -> Self {
        Self {
            root: root.into(),
            output_dir,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn markdown_dir(&self) -> PathBuf {
        self.root.join(MARKDOWN_DIR)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(self.output_dir)
    }

    /// Create the root and output directories. Returns true if either was
    /// missing, meaning there is nothing to regenerate from yet.
    pub fn ensure_layout(&self) -> Result<bool> {
        let mut created = false;
        for dir in [self.root.clone(), self.output_dir()] {
            if !dir.exists() {
                fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                debug!("Created {}", dir.display());
                created = true;
            }
        }
        Ok(created)
    }

    /// Remove and recreate the markdown directory
    pub fn reset_markdown(&self) -> Result<()> {
        let dir = self.markdown_dir();
        if dir.exists() {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("Failed to remove {}", dir.display()))?;
        }
        fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))
    }

    /// Delete everything inside the output directory
    pub fn clear_output(&self) -> Result<()> {
        let dir = self.output_dir();
        if !dir.exists() {
            return fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()));
        }

        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }

    /// File names in the markdown directory, sorted
    pub fn markdown_files(&self) -> Result<Vec<String>> {
        let dir = self.markdown_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Read a stored markdown document
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.markdown_dir().join(name);
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Store a fetched document as its URL line followed by the markdown
    pub fn write_markdown(&self, document: &SourceDocument) -> Result<PathBuf> {
        let path = self.markdown_dir().join(&document.file_name);
        fs::write(&path, document.to_text())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write a generated file into the output directory
    pub fn write_output(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.output_dir().join(name);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
