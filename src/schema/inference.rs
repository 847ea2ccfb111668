//! Type inference from documented type phrases
//!
//! Type cells in the docs are prose: "array of snowflakes", "? partial user
//! object", "ISO8601 timestamp". Inference runs an ordered list of rules over
//! the tokenized phrase; the first rule whose predicate matches decides the
//! type. The final rule always matches and produces a record reference.

use super::naming;
use super::types::{PrimitiveKind, TypeDescriptor};
use tracing::trace;

/// A documented type phrase split into tokens.
///
/// Leading `?` markers are removed and tokens from the first parenthetical
/// onward are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Phrase<'a> {
    /// Tokenize a raw type phrase
    pub fn parse(raw: &'a str) -> Self {
        let tokens = raw
            .trim_start_matches('?')
            .split_whitespace()
            .take_while(|token| !token.starts_with('('))
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn first(&self) -> Option<&'a str> {
        self.tokens.first().copied()
    }

    pub fn last(&self) -> Option<&'a str> {
        self.tokens.last().copied()
    }

    /// Whether the first two tokens are `first second`
    pub fn starts_with_pair(&self, first: &str, second: &str) -> bool {
        matches!(self.tokens.as_slice(), [a, b, ..] if *a == first && *b == second)
    }

    /// Tokens from `skip` onward, joined with single spaces
    pub fn rest(&self, skip: usize) -> String {
        self.tokens.get(skip..).unwrap_or_default().join(" ")
    }

    /// The whole phrase, joined with single spaces
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Rule predicate
pub type Predicate = fn(&Phrase<'_>) -> bool;

/// Rule handler. Receives the inferrer so it can recurse on sub-phrases.
pub type Handler = fn(&TypeInferrer, &Phrase<'_>) -> TypeDescriptor;

/// One (predicate, handler) pair in the inference rule list
#[derive(Clone, Copy)]
pub struct TypeRule {
    name: &'static str,
    applies: Predicate,
    infer: Handler,
}

impl TypeRule {
    pub const fn new(name: &'static str, applies: Predicate, infer: Handler) -> Self {
        Self {
            name,
            applies,
            infer,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn applies(&self, phrase: &Phrase<'_>) -> bool {
        (self.applies)(phrase)
    }

    pub fn apply(&self, inferrer: &TypeInferrer, phrase: &Phrase<'_>) -> TypeDescriptor {
        (self.infer)(inferrer, phrase)
    }
}

impl std::fmt::Debug for TypeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRule").field("name", &self.name).finish()
    }
}

/// Primitive lookup for single-token phrases
pub fn primitive_for(token: &str) -> Option<PrimitiveKind> {
    match token {
        "string" | "snowflake" => Some(PrimitiveKind::String),
        "integer" | "int" => Some(PrimitiveKind::Integer),
        "float" => Some(PrimitiveKind::Float),
        "boolean" | "null" => Some(PrimitiveKind::Boolean),
        "mixed" => Some(PrimitiveKind::Dynamic),
        _ => None,
    }
}

const NUMERAL_PREFIXES: &[&str] = &["two", "three", "four", "five"];

/// Default rules in precedence order
pub fn default_rules() -> Vec<TypeRule> {
    vec![
        TypeRule::new(
            "empty",
            |p| p.is_empty(),
            |_, _| TypeDescriptor::primitive(PrimitiveKind::Dynamic),
        ),
        TypeRule::new(
            "primitive",
            |p| p.len() == 1 && p.first().and_then(primitive_for).is_some(),
            |_, p| {
                p.first()
                    .and_then(primitive_for)
                    .map_or_else(TypeDescriptor::string, TypeDescriptor::primitive)
            },
        ),
        TypeRule::new(
            "array",
            |p| p.starts_with_pair("array", "of") || p.starts_with_pair("list", "of"),
            |inferrer, p| {
                let element = p.rest(2);
                let singular = element.strip_suffix('s').unwrap_or(&element);
                TypeDescriptor::array(inferrer.infer(singular))
            },
        ),
        TypeRule::new(
            "dictionary",
            |p| p.starts_with_pair("dictionary", "with"),
            |_, _| TypeDescriptor::StringMap,
        ),
        TypeRule::new(
            "one_of",
            |p| p.starts_with_pair("one", "of"),
            |_, p| TypeDescriptor::one_of(naming::identifier(&p.rest(2))),
        ),
        TypeRule::new(
            "image_data",
            |p| p.starts_with_pair("image", "data"),
            |_, _| TypeDescriptor::string(),
        ),
        TypeRule::new(
            "timestamp",
            |p| p.len() == 2 && p.tokens().contains(&"timestamp"),
            |_, _| TypeDescriptor::primitive(PrimitiveKind::Timestamp),
        ),
        TypeRule::new(
            "string_suffix",
            |p| matches!(p.last(), Some("string" | "id")),
            |_, _| TypeDescriptor::string(),
        ),
        TypeRule::new(
            "numeral_count",
            |p| {
                p.first()
                    .is_some_and(|t| NUMERAL_PREFIXES.iter().any(|n| t.starts_with(n)))
            },
            |inferrer, p| inferrer.infer(&p.rest(1)),
        ),
        TypeRule::new("record_reference", |_| true, record_reference),
    ]
}

/// Fallback: treat the phrase as the name of another record
fn record_reference(_: &TypeInferrer, phrase: &Phrase<'_>) -> TypeDescriptor {
    let text = phrase.text();
    let mut name = text.as_str();
    for prefix in ["partial ", "a ", "an "] {
        name = name.strip_prefix(prefix).unwrap_or(name);
    }
    name = name.strip_suffix(" object").unwrap_or(name);

    TypeDescriptor::reference(naming::identifier(name))
}

/// Ordered rule list, first match wins
#[derive(Debug, Clone)]
pub struct TypeInferrer {
    rules: Vec<TypeRule>,
}

impl Default for TypeInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInferrer {
    /// Create an inferrer with the default rules
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Create an inferrer from an explicit rule list
    pub fn from_rules(rules: Vec<TypeRule>) -> Self {
        Self { rules }
    }

    /// Add a rule that takes precedence over all existing rules
    #[must_use]
    pub fn with_rule(mut self, rule: TypeRule) -> Self {
        self.rules.insert(0, rule);
        self
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[TypeRule] {
        &self.rules
    }

    /// Name of the rule that decides `raw`, if any
    pub fn matching_rule(&self, raw: &str) -> Option<&'static str> {
        let phrase = Phrase::parse(raw);
        self.rules
            .iter()
            .find(|rule| rule.applies(&phrase))
            .map(TypeRule::name)
    }

    /// Infer a type from a documented type phrase
    pub fn infer(&self, raw: &str) -> TypeDescriptor {
        let phrase = Phrase::parse(raw);
        match self.rules.iter().find(|rule| rule.applies(&phrase)) {
            Some(rule) => {
                let inferred = rule.apply(self, &phrase);
                trace!("Inferred '{}' as {} via {}", raw, inferred, rule.name());
                inferred
            }
            None => record_reference(self, &phrase),
        }
    }
}

/// Infer a type with the default rules (convenience function)
pub fn infer_type(raw: &str) -> TypeDescriptor {
    TypeInferrer::new().infer(raw)
}
