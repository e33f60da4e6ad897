//! The language-agnostic value model.
//!
//! Every entity here is immutable once built: construction flows through a
//! validating builder, fields are private, and accessors expose read-only
//! views. Mutation means building a new entity; a fresh analysis run
//! produces an entirely new graph with newly generated ids.
//!
//! Closed taxonomies (scope level, definition kind, reference kind,
//! documentation format, unit type) are enums, so consumers handle every
//! case exhaustively and the compiler flags additions.

mod definition;
mod documentation;
mod position;
mod reference;
mod scope;
mod unit;

pub use definition::{Definition, DefinitionBuilder, DefinitionKind};
pub use documentation::{
    Documentation, DocumentationBuilder, DocumentationFormat, DocumentationTag,
    DocumentationTagBuilder,
};
pub use position::{Position, PositionBuilder};
pub use reference::{Reference, ReferenceBuilder, ReferenceKind};
pub use scope::{Scope, ScopeBuilder, ScopeLevel};
pub use unit::{CodeUnit, CodeUnitBuilder, UnitType};

/// Open-ended per-entity metadata.
///
/// Carries parser-supplied facts the model does not structure (visibility
/// flags, declared type names, resolved symbol info, downstream metrics).
/// A `BTreeMap` keeps serialized output deterministic.
pub type Metadata = std::collections::BTreeMap<String, serde_json::Value>;
