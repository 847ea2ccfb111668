//! Single-pass table scanner
//!
//! Walks the normalized lines once, tracking the most recent section heading
//! and a two-state machine (scanning / in-table) that collects field rows
//! under qualifying level-6 headings.

use super::normalize::{clean_cell, heading_level, heading_title, normalize, split_row};
use super::types::{Document, OpenTable, RawFieldRow, Table};
use crate::schema::{naming, TypeInferrer};
use tracing::debug;

/// Words that make a level-6 heading introduce a field table, in match order
pub const QUALIFYING_WORDS: &[&str] = &["Structure", "Object", "Metadata", "Info"];

/// Qualifying words kept in the table title
const VERBATIM_WORDS: &[&str] = &["Metadata", "Info"];

/// Headings containing this word never open a table or update the section
const EXAMPLE_MARKER: &str = "Example";

/// Deepest heading level that counts as a section for anchors
const MAX_SECTION_LEVEL: usize = 4;

const TABLE_HEADING_LEVEL: usize = 6;

/// Minimum cells for a field row: name, type, description
const ROW_CELLS: usize = 3;

#[derive(Debug)]
enum ScanState {
    Scanning,
    InTable(OpenTable),
}

/// Scanner state for one document.
///
/// All state lives in this value, so independent documents can be scanned
/// concurrently.
#[derive(Debug)]
pub struct TableScanner {
    source_url: String,
    inferrer: TypeInferrer,
    last_header: String,
    state: ScanState,
    tables: Vec<Table>,
}

impl TableScanner {
    /// Create a scanner for a document with the given source URL
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            inferrer: TypeInferrer::new(),
            last_header: String::new(),
            state: ScanState::Scanning,
            tables: Vec::new(),
        }
    }

    /// Use a custom type inferrer for field types
    #[must_use]
    pub fn with_inferrer(mut self, inferrer: TypeInferrer) -> Self {
        self.inferrer = inferrer;
        self
    }

    /// Text of the most recent level 1-4 heading
    pub fn last_header(&self) -> &str {
        &self.last_header
    }

    /// Whether a table is currently open
    pub fn in_table(&self) -> bool {
        matches!(self.state, ScanState::InTable(_))
    }

    /// Tables finalized so far
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Scan every line of a normalized document
    pub fn scan(mut self, document: &Document) -> Vec<Table> {
        for line in &document.lines {
            self.process_line(line);
        }
        self.finish()
    }

    /// Feed one trimmed line
    pub fn process_line(&mut self, line: &str) {
        if self.in_table() {
            if line.starts_with('|') {
                self.push_row(line);
                return;
            }
            if line.starts_with('>') {
                return;
            }
            self.close_table();
        }
        self.track_heading(line);
    }

    /// Close any open table and return everything found
    pub fn finish(mut self) -> Vec<Table> {
        if self.in_table() {
            self.close_table();
        }
        self.tables
    }

    fn track_heading(&mut self, line: &str) {
        let Some(level) = heading_level(line) else {
            return;
        };
        let title = heading_title(line);
        if title.contains(EXAMPLE_MARKER) {
            return;
        }

        if level == TABLE_HEADING_LEVEL {
            self.open_table(title);
        } else if level <= MAX_SECTION_LEVEL {
            self.last_header = title.to_string();
        }
    }

    fn open_table(&mut self, title: &str) {
        let Some(word) = QUALIFYING_WORDS.iter().find(|word| title.contains(*word)) else {
            return;
        };

        let fragment = naming::kebab(&format!("{}{}", self.last_header, title));
        let anchor_url = format!("{}#{}", self.source_url, fragment);

        let display_title = if VERBATIM_WORDS.contains(word) {
            title.to_string()
        } else {
            title.strip_suffix(word).unwrap_or(title).trim().to_string()
        };

        debug!("Opened table '{}' at {}", display_title, anchor_url);
        self.state = ScanState::InTable(OpenTable::new(display_title, anchor_url));
    }

    fn push_row(&mut self, line: &str) {
        let ScanState::InTable(table) = &mut self.state else {
            return;
        };

        let cells = split_row(line);
        if cells.len() < ROW_CELLS {
            debug!("Skipping malformed row: {}", line);
            return;
        }

        let row = RawFieldRow {
            optional: cells[0].ends_with('?'),
            name: clean_cell(&cells[0]),
            raw_type: clean_cell(&cells[1]),
            raw_description: clean_cell(&cells[2]),
        };
        if row.is_deprecated() {
            debug!("Skipping deprecated field '{}'", row.name);
            return;
        }

        table.rows.push(row.into_field(&self.inferrer));
    }

    fn close_table(&mut self) {
        let ScanState::InTable(table) = std::mem::replace(&mut self.state, ScanState::Scanning)
        else {
            return;
        };

        if table.rows.is_empty() {
            debug!("Table '{}' closed without rows", table.title);
            return;
        }

        let title = table.title.clone();
        match table.finish() {
            Some(table) => self.tables.push(table),
            None => debug!("Table '{}' had only header rows", title),
        }
    }
}

/// Normalize a raw document and extract its field tables
pub fn extract_tables(text: &str) -> Vec<Table> {
    let document = normalize(text);
    TableScanner::new(document.source_url.clone()).scan(&document)
}
