//! Text normalization
//!
//! Turns a raw document into a line stream and cleans individual table cells.

use super::types::Document;
use regex::Regex;
use std::sync::LazyLock;

/// `[label](link)` or `[label][ref]`
static HYPERLINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\][\[\(].*?[\]\)]").unwrap());

/// Split a raw document into its source URL (first line) and body lines.
///
/// Blank lines are removed, the rest are trimmed, and an empty sentinel line
/// is appended.
pub fn normalize(text: &str) -> Document {
    let mut raw_lines = text.split('\n');
    let source_url = raw_lines.next().unwrap_or_default().trim().to_string();

    let mut lines: Vec<String> = raw_lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    lines.push(String::new());

    Document { source_url, lines }
}

/// Replace markdown hyperlinks with their label
pub fn remove_hyperlinks(text: &str) -> String {
    HYPERLINK_REGEX.replace_all(text, "$1").trim().to_string()
}

/// Split a table row into trimmed cells.
///
/// Outer pipes are removed first. A pipe behind an odd run of backslashes
/// is escaped and stays inside its cell; `\\|` is a literal backslash
/// followed by the delimiter.
pub fn split_row(line: &str) -> Vec<String> {
    let inner = line.trim_matches(|c: char| c == '|' || c.is_whitespace());

    let mut cells = Vec::new();
    let mut start = 0;
    let mut backslashes = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '\\' => backslashes += 1,
            '|' if backslashes % 2 == 0 => {
                cells.push(unescape_cell(&inner[start..i]));
                start = i + 1;
                backslashes = 0;
            }
            _ => backslashes = 0,
        }
    }
    cells.push(unescape_cell(&inner[start..]));
    cells
}

fn unescape_cell(cell: &str) -> String {
    cell.trim().replace("\\|", "|")
}

/// Strip decoration around a cell (`?`, `*`, `\`, backticks, whitespace)
/// and remove hyperlinks.
pub fn clean_cell(cell: &str) -> String {
    let trimmed =
        cell.trim_matches(|c: char| matches!(c, '?' | '*' | '\\' | '`') || c.is_whitespace());
    remove_hyperlinks(trimmed)
}

/// Heading text without its leading `#` markers
pub fn heading_title(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '#' || c == ' ')
}

/// Level of an ATX heading (`## Foo` is 2), `None` for other lines
pub fn heading_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    line[level..].starts_with(' ').then_some(level)
}
