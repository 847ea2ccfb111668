//! Schema module
//!
//! The record model produced from documentation tables, plus the two
//! normalization steps applied to it.
//!
//! # Features
//!
//! - **Type Inference**: Resolves documented type phrases to formal types
//! - **Identifier Normalization**: Capitalized identifiers with canonical acronyms
//! - **Lazy References**: Record references stay symbolic and are never validated

mod inference;
pub mod naming;
mod types;

pub use inference::{
    default_rules, infer_type, primitive_for, Handler, Phrase, Predicate, TypeInferrer, TypeRule,
};
pub use types::{Field, PrimitiveKind, RecordModel, ReferenceKind, TypeDescriptor};

#[cfg(test)]
mod tests;
