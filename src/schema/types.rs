//! Schema types

use super::naming;
use serde::{Deserialize, Serialize};

/// Primitive kinds a documented type phrase can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    /// Untyped value ("mixed" in the docs)
    Dynamic,
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimitiveKind::String => write!(f, "string"),
            PrimitiveKind::Integer => write!(f, "integer"),
            PrimitiveKind::Float => write!(f, "float"),
            PrimitiveKind::Boolean => write!(f, "boolean"),
            PrimitiveKind::Timestamp => write!(f, "timestamp"),
            PrimitiveKind::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Where a reference came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// A named record ("partial user object")
    Record,
    /// A "one of ..." union placeholder
    OneOf,
}

/// Formal type inferred from a free-text type phrase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Array(Box<TypeDescriptor>),
    /// String to string dictionary
    StringMap,
    /// Symbolic reference to another record, resolved by name at compile time
    Reference { name: String, kind: ReferenceKind },
}

impl TypeDescriptor {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeDescriptor::Primitive(kind)
    }

    pub fn string() -> Self {
        TypeDescriptor::Primitive(PrimitiveKind::String)
    }

    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(element))
    }

    /// Reference to a named record
    pub fn reference(name: impl Into<String>) -> Self {
        TypeDescriptor::Reference {
            name: name.into(),
            kind: ReferenceKind::Record,
        }
    }

    /// Reference to a "one of" union placeholder
    pub fn one_of(name: impl Into<String>) -> Self {
        TypeDescriptor::Reference {
            name: name.into(),
            kind: ReferenceKind::OneOf,
        }
    }

    /// Name of the referenced record, if this is a reference
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Reference { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether this type, or any element type, is the given primitive
    pub fn contains_primitive(&self, kind: PrimitiveKind) -> bool {
        match self {
            TypeDescriptor::Primitive(k) => *k == kind,
            TypeDescriptor::Array(element) => element.contains_primitive(kind),
            TypeDescriptor::StringMap | TypeDescriptor::Reference { .. } => false,
        }
    }

    /// Whether this type, or any element type, is a string map
    pub fn contains_string_map(&self) -> bool {
        match self {
            TypeDescriptor::StringMap => true,
            TypeDescriptor::Array(element) => element.contains_string_map(),
            _ => false,
        }
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeDescriptor::Primitive(kind) => write!(f, "{kind}"),
            TypeDescriptor::Array(element) => write!(f, "array<{element}>"),
            TypeDescriptor::StringMap => write!(f, "map<string,string>"),
            TypeDescriptor::Reference { name, .. } => write!(f, "$ref:{name}"),
        }
    }
}

/// One record member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Raw name as documented, used as the serialization key
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: TypeDescriptor,

    /// Raw description
    pub description: String,

    /// Marked optional with a trailing `?` in the docs
    pub optional: bool,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        field_type: TypeDescriptor,
        description: impl Into<String>,
        optional: bool,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            description: description.into(),
            optional,
        }
    }
}

/// A named record extracted from one documentation table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordModel {
    /// Display title, e.g. "Guild Member"
    pub name: String,

    /// Anchor URL of the table the record was read from
    pub source_url: String,

    pub fields: Vec<Field>,
}

impl RecordModel {
    pub fn new(name: impl Into<String>, source_url: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            source_url: source_url.into(),
            fields,
        }
    }

    /// Type identifier for the record, e.g. "GuildMember"
    pub fn identifier(&self) -> String {
        naming::identifier(&self.name)
    }

    /// Whether any field uses the given primitive
    pub fn uses_primitive(&self, kind: PrimitiveKind) -> bool {
        self.fields
            .iter()
            .any(|f| f.field_type.contains_primitive(kind))
    }

    /// Whether any field uses a string map
    pub fn uses_string_map(&self) -> bool {
        self.fields.iter().any(|f| f.field_type.contains_string_map())
    }
}
