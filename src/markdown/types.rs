//! Markdown extraction types

use crate::schema::{Field, RecordModel, TypeInferrer};
use serde::{Deserialize, Serialize};

/// A normalized document: source URL plus non-empty trimmed body lines.
///
/// The last line is always an empty sentinel so that a table still open at
/// end of input gets closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub source_url: String,
    pub lines: Vec<String>,
}

/// Cells of one table row after decoration and hyperlink stripping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFieldRow {
    pub name: String,
    pub raw_type: String,
    pub raw_description: String,
    pub optional: bool,
}

impl RawFieldRow {
    /// Whether the description flags the field as deprecated
    pub fn is_deprecated(&self) -> bool {
        self.raw_description
            .split_whitespace()
            .any(|word| word == "deprecated")
    }

    /// Resolve the type phrase and turn the row into a field
    pub fn into_field(self, inferrer: &TypeInferrer) -> Field {
        let field_type = inferrer.infer(&self.raw_type);
        Field {
            name: self.name,
            field_type,
            description: self.raw_description,
            optional: self.optional,
        }
    }
}

/// A field table found in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Heading title with the qualifying word stripped
    pub title: String,

    /// Source URL plus the anchor fragment of the heading
    pub anchor_url: String,

    /// Fields, header and separator rows already removed
    pub fields: Vec<Field>,
}

impl From<Table> for RecordModel {
    fn from(table: Table) -> Self {
        RecordModel::new(table.title, table.anchor_url, table.fields)
    }
}

/// A table that is still receiving rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OpenTable {
    pub title: String,
    pub anchor_url: String,
    pub rows: Vec<Field>,
}

/// Rows that are markdown header and separator syntax
const HEADER_ROWS: usize = 2;

impl OpenTable {
    pub fn new(title: String, anchor_url: String) -> Self {
        Self {
            title,
            anchor_url,
            rows: Vec::new(),
        }
    }

    /// Drop the header rows; `None` when no real field is left
    pub fn finish(self) -> Option<Table> {
        let fields: Vec<Field> = self.rows.into_iter().skip(HEADER_ROWS).collect();
        if fields.is_empty() {
            return None;
        }
        Some(Table {
            title: self.title,
            anchor_url: self.anchor_url,
            fields,
        })
    }
}
