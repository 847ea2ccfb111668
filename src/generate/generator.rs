//! Store-backed generator

use super::parse_document_with;
use crate::config::Config;
use crate::error::Result;
use crate::render::{renderer_for, Renderer};
use crate::schema::TypeInferrer;
use crate::store::DocStore;
use serde::Serialize;
use tracing::info;

/// One generated output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Markdown file name, e.g. `Guild.md`
    pub source: String,
    /// Output file name, e.g. `guild.go`
    pub output: String,
    /// Number of records rendered
    pub records: usize,
}

/// Outcome of a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub generated: Vec<GeneratedFile>,
    /// Documents without any record
    pub skipped: Vec<String>,
}

impl GenerateReport {
    pub fn total_records(&self) -> usize {
        self.generated.iter().map(|f| f.records).sum()
    }
}

/// Renders every stored markdown document into the store's output directory
pub struct Generator {
    store: DocStore,
    renderer: Box<dyn Renderer>,
    package: String,
    inferrer: TypeInferrer,
}

impl Generator {
    pub fn new(store: DocStore, renderer: Box<dyn Renderer>, package: impl Into<String>) -> Self {
        Self {
            store,
            renderer,
            package: package.into(),
            inferrer: TypeInferrer::new(),
        }
    }

    /// Generator for the configured output directory, target and package
    pub fn from_config(config: &Config) -> Self {
        let renderer = renderer_for(config.target);
        let store = DocStore::new(&config.out_dir, renderer.output_dir());
        Self::new(store, renderer, &config.package)
    }

    /// Use a custom type inferrer
    #[must_use]
    pub fn with_inferrer(mut self, inferrer: TypeInferrer) -> Self {
        self.inferrer = inferrer;
        self
    }

    pub fn store(&self) -> &DocStore {
        &self.store
    }

    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }

    /// Parse and render every stored document
    pub fn run(&self) -> Result<GenerateReport> {
        let mut report = GenerateReport::default();

        for name in self.store.markdown_files()? {
            let text = self.store.read(&name)?;
            let records = parse_document_with(&text, &self.inferrer);
            if records.is_empty() {
                info!("parsed {} but found no structs", name);
                report.skipped.push(name);
                continue;
            }

            let output = self.renderer.output_file_name(&name);
            let rendered = self.renderer.render_document(&self.package, &records);
            self.store.write_output(&output, &rendered)?;
            info!("parsed {} -> {}", name, output);

            report.generated.push(GeneratedFile {
                source: name,
                output,
                records: records.len(),
            });
        }

        Ok(report)
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("store", &self.store)
            .field("target", &self.renderer.target())
            .field("package", &self.package)
            .finish_non_exhaustive()
    }
}
