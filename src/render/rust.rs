//! Rust struct renderer

use super::{markdown_stem, Renderer};
use crate::schema::{naming, Field, PrimitiveKind, RecordModel, ReferenceKind, TypeDescriptor};
use crate::types::Target;

const DERIVES: &str = "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]";

/// Renders records as serde-annotated Rust structs
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl RustRenderer {
    /// Rust spelling of a type. Record references are boxed unless they
    /// already sit behind a collection.
    pub fn render_type(ty: &TypeDescriptor) -> String {
        Self::render_type_inner(ty, true)
    }

    fn render_type_inner(ty: &TypeDescriptor, box_records: bool) -> String {
        match ty {
            TypeDescriptor::Primitive(kind) => match kind {
                PrimitiveKind::String => "String",
                PrimitiveKind::Integer => "i64",
                PrimitiveKind::Float => "f64",
                PrimitiveKind::Boolean => "bool",
                PrimitiveKind::Timestamp => "DateTime<Utc>",
                PrimitiveKind::Dynamic => "serde_json::Value",
            }
            .to_string(),
            TypeDescriptor::Array(element) => {
                format!("Vec<{}>", Self::render_type_inner(element, false))
            }
            TypeDescriptor::StringMap => "HashMap<String, String>".to_string(),
            TypeDescriptor::Reference { name, kind } => match kind {
                ReferenceKind::Record if box_records => format!("Box<{name}>"),
                _ => name.clone(),
            },
        }
    }

    /// Doc comment, serde attribute and declaration of one field
    fn render_field(field: &Field) -> String {
        let description = naming::description(&field.description);
        let doc = if description.is_empty() {
            String::new()
        } else {
            format!("    /// {description}\n")
        };
        let name = naming::field_name(&field.name);
        let rendered = Self::render_type(&field.field_type);

        if field.optional {
            format!(
                "{doc}    #[serde(rename = {:?}, default, skip_serializing_if = \"Option::is_none\")]\n    pub {name}: Option<{rendered}>,\n",
                field.name
            )
        } else {
            format!(
                "{doc}    #[serde(rename = {:?})]\n    pub {name}: {rendered},\n",
                field.name
            )
        }
    }
}

impl Renderer for RustRenderer {
    fn target(&self) -> Target {
        Target::Rust
    }

    fn render_record(&self, record: &RecordModel) -> String {
        let fields: String = record.fields.iter().map(Self::render_field).collect();
        format!(
            "/// {}\n///\n/// <{}>\n{DERIVES}\npub struct {} {{\n{fields}}}",
            record.name,
            record.source_url,
            record.identifier()
        )
    }

    fn wrap(&self, package: &str, records: &[RecordModel], body: &str) -> String {
        let mut header = format!("//! `{package}` API types\n\nuse serde::{{Deserialize, Serialize}};\n");
        if records
            .iter()
            .any(|r| r.uses_primitive(PrimitiveKind::Timestamp))
        {
            header.push_str("use chrono::{DateTime, Utc};\n");
        }
        if records.iter().any(RecordModel::uses_string_map) {
            header.push_str("use std::collections::HashMap;\n");
        }
        format!("{header}{body}")
    }

    fn output_file_name(&self, markdown_name: &str) -> String {
        let stem = markdown_stem(markdown_name)
            .to_lowercase()
            .replace('-', "_");
        format!("{stem}.rs")
    }

    fn output_dir(&self) -> &'static str {
        "rust"
    }
}
