//! Generation pipeline
//!
//! Ties extraction and rendering together: document text in, one rendered
//! source file out per document that contains at least one record.

mod generator;

pub use generator::{GenerateReport, GeneratedFile, Generator};

use crate::markdown::{normalize, TableScanner};
use crate::render::Renderer;
use crate::schema::{RecordModel, TypeInferrer};

/// Extract every record from a document (URL line first), in discovery order
pub fn parse_document(text: &str) -> Vec<RecordModel> {
    parse_document_with(text, &TypeInferrer::new())
}

/// Extract records using a custom type inferrer
pub fn parse_document_with(text: &str, inferrer: &TypeInferrer) -> Vec<RecordModel> {
    let document = normalize(text);
    TableScanner::new(document.source_url.clone())
        .with_inferrer(inferrer.clone())
        .scan(&document)
        .into_iter()
        .map(RecordModel::from)
        .collect()
}

/// Render a document's records as one output unit; `None` when the
/// document has no records
pub fn render_document(text: &str, renderer: &dyn Renderer, package: &str) -> Option<String> {
    let records = parse_document(text);
    if records.is_empty() {
        return None;
    }
    Some(renderer.render_document(package, &records))
}

#[cfg(test)]
mod tests;
