//! Configuration for doc2struct
//!
//! Settings live in a JSON file (`config.json` by default) or a YAML file
//! when the extension is `.yaml`/`.yml`. Keys are camelCase; missing keys
//! take their defaults, and a missing file is created with the defaults.

use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::Target;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// GitHub contents API root of the Discord documentation
pub const DEFAULT_SOURCE_URL: &str =
    "https://api.github.com/repos/discord/discord-api-docs/contents/docs/";

/// Public documentation root used to build document URLs
pub const DEFAULT_DOCS_URL: &str = "https://discord.com/developers/";

/// Documentation directories that hold no API structures
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "rich_presence",
    "tutorials",
    "game_sdk",
    "policies_and_agreements",
    "game_and_server_management",
    "dispatch",
];

// ============================================================================
// Config File Format
// ============================================================================

/// On-disk encoding of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Format implied by a file extension; anything but `.yaml`/`.yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

// ============================================================================
// Config
// ============================================================================

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// GitHub token; empty means anonymous requests
    pub token: String,

    /// Root of the on-disk layout
    pub out_dir: PathBuf,

    /// Documentation directories the fetcher skips (case-insensitive)
    pub ignore_dirs: Vec<String>,

    /// Package/module label written into generated files
    pub package: String,

    pub target: Target,

    /// Contents API URL listing the documentation directories
    pub source_url: String,

    /// Public documentation root
    pub docs_url: String,

    /// Parallel file downloads
    pub concurrency: usize,

    pub requests_per_second: u32,

    /// Retries per request after the first attempt
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            out_dir: PathBuf::from("out"),
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(ToString::to_string).collect(),
            package: "eventide".to_string(),
            target: Target::default(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
            concurrency: 8,
            requests_per_second: 10,
            max_retries: 3,
        }
    }
}

impl Config {
    /// Parse config text in the given format and validate it
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let config: Config = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Serialize in the given format
    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        Ok(match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
        })
    }

    /// Load an existing config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content, ConfigFormat::from_path(path))
    }

    /// Load a config file, writing the defaults first if it does not exist
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(Error::config(format!("{} is a directory", path.display())));
        }
        if path.exists() {
            return Self::load(path);
        }

        let config = Config::default();
        config.save(path)?;
        info!("created new config file {}", path.display());
        Ok(config)
    }

    /// Write the config, format chosen by extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.render(ConfigFormat::from_path(path))?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))
    }

    /// Check the values a run depends on
    pub fn validate(&self) -> Result<()> {
        if self.out_dir.as_os_str().is_empty() {
            return Err(Error::invalid_value("outDir", "cannot be empty"));
        }
        if self.package.trim().is_empty() {
            return Err(Error::invalid_value("package", "cannot be empty"));
        }
        url::Url::parse(&self.source_url)
            .map_err(|e| Error::invalid_value("sourceUrl", e.to_string()))?;
        url::Url::parse(&self.docs_url)
            .map_err(|e| Error::invalid_value("docsUrl", e.to_string()))?;
        if self.concurrency == 0 {
            return Err(Error::invalid_value("concurrency", "must be at least 1"));
        }
        Ok(())
    }

    /// HTTP client settings for the fetcher
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .header("Accept", "application/vnd.github+json")
            .token(&self.token)
            .rate_limit(RateLimiterConfig::per_second(self.requests_per_second))
            .max_retries(self.max_retries)
            .build()
    }
}
