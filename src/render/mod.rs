//! Record rendering
//!
//! Serializes `RecordModel`s into source code for a target language.
//!
//! # Targets
//!
//! - **Go**: structs with `json` tags, record references by pointer
//! - **Rust**: serde structs, record references boxed
//!
//! Rendering never fails and never validates references; an unresolved
//! name is left for the target compiler to report.

mod go;
mod rust;

pub use go::GoRenderer;
pub use rust::RustRenderer;

use crate::schema::RecordModel;
use crate::types::Target;

/// A target-language backend
pub trait Renderer: Send + Sync {
    /// Language this renderer emits
    fn target(&self) -> Target;

    /// Render one record definition
    fn render_record(&self, record: &RecordModel) -> String;

    /// Wrap the rendered records of one document (package line, imports)
    fn wrap(&self, package: &str, records: &[RecordModel], body: &str) -> String;

    /// Output file name for a markdown file name, e.g. `Guild.md`
    fn output_file_name(&self, markdown_name: &str) -> String;

    /// Directory under the output root that holds generated files
    fn output_dir(&self) -> &'static str;

    /// Render records in discovery order, each surrounded by newlines
    fn render_records(&self, records: &[RecordModel]) -> String {
        records
            .iter()
            .map(|record| format!("\n{}\n", self.render_record(record)))
            .collect()
    }

    /// Render a full output unit for one document
    fn render_document(&self, package: &str, records: &[RecordModel]) -> String {
        let body = self.render_records(records);
        self.wrap(package, records, &body)
    }
}

/// Renderer for a target
pub fn renderer_for(target: Target) -> Box<dyn Renderer> {
    match target {
        Target::Go => Box::new(GoRenderer),
        Target::Rust => Box::new(RustRenderer),
    }
}

/// Markdown file name without its `.md` extension
fn markdown_stem(markdown_name: &str) -> &str {
    markdown_name.strip_suffix(".md").unwrap_or(markdown_name)
}
