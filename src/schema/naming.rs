//! Identifier and description normalization
//!
//! Documentation names are snake/kebab/space separated ("user_id",
//! "connection object types"). Generated code wants capitalized identifiers
//! with canonical acronyms ("UserID", "ConnectionObjectTypes").

use heck::{ToKebabCase, ToSnakeCase, ToTitleCase};

/// Canonical spelling of a word if it is a known acronym, otherwise the word unchanged
pub fn canonical_word(word: &str) -> String {
    let canonical = match word.to_lowercase().as_str() {
        "id" => "ID",
        "ids" => "IDs",
        "url" => "URL",
        "urls" => "URLs",
        "mfa" => "MFA",
        "rpc" => "RPC",
        "http" => "HTTP",
        "https" => "HTTPS",
        "http(s)" => "HTTP(S)",
        "afk" => "AFK",
        "nsfw" => "NSFW",
        _ => return word.to_string(),
    };
    canonical.to_string()
}

/// Convert a phrase into a capitalized identifier.
///
/// ```
/// use doc2struct::schema::naming::identifier;
///
/// assert_eq!(identifier("user_id"), "UserID");
/// assert_eq!(identifier("connection object types"), "ConnectionObjectTypes");
/// ```
pub fn identifier(phrase: &str) -> String {
    phrase
        .to_title_case()
        .split(' ')
        .map(canonical_word)
        .collect()
}

/// Normalize a description for a doc comment: acronyms canonicalized,
/// backticks removed, first character uppercased.
pub fn description(text: &str) -> String {
    let words: Vec<String> = text
        .split(' ')
        .map(|w| canonical_word(w).trim_matches('`').to_string())
        .collect();
    let joined = words.join(" ");

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Kebab-case anchor fragment
pub fn kebab(text: &str) -> String {
    text.to_kebab_case()
}

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Identifiers that cannot be written as raw identifiers
const RESERVED_PATH_SEGMENTS: &[&str] = &["crate", "self", "super"];

/// snake_case Rust field name for a raw documented name
pub fn field_name(raw: &str) -> String {
    let snake = raw.to_snake_case();
    if snake.is_empty() {
        return "field".to_string();
    }
    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{snake}");
    }
    if RESERVED_PATH_SEGMENTS.contains(&snake.as_str()) {
        return format!("{snake}_");
    }
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        return format!("r#{snake}");
    }
    snake
}
