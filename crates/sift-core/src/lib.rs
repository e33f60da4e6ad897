//! Language-agnostic source code analysis.
//!
//! Sift normalizes source code written in arbitrary languages into a single
//! intermediate representation: a graph of code units, definitions,
//! references, scopes, and documentation that downstream tools (graph
//! stores, metric engines, search indexes) consume without per-language
//! knowledge.
//!
//! # Components
//!
//! - [`model`] - the immutable value model, built through validating builders
//! - [`validate`] - shared precondition checks
//! - [`JavaAnalyzer`] - the Java façade: tree-sitter parse plus conversion
//! - [`AnalyzerRegistry`] - maps file extensions to analyzer factories
//!
//! # Example
//!
//! ```ignore
//! use sift_core::AnalyzerRegistry;
//!
//! let registry = AnalyzerRegistry::new();
//! let analyzer = registry.resolve(path).expect("supported extension");
//! let unit = analyzer.parse_file(path)?;
//! for definition in analyzer.extract_definitions(&unit) {
//!     println!("{} ({:?})", definition.name(), definition.kind());
//! }
//! ```
//!
//! All operations are synchronous. Analyses of distinct files may run
//! concurrently on shared façades; only registry registration needs
//! external serialization against resolution.

pub mod analyzer;
pub mod error;
pub mod java;
pub mod model;
pub mod registry;
pub mod treesitter;
pub mod validate;

pub use analyzer::CodeAnalyzer;
pub use error::AnalysisError;
pub use java::JavaAnalyzer;
pub use model::{
    CodeUnit, Definition, DefinitionKind, Documentation, DocumentationFormat, DocumentationTag,
    Metadata, Position, Reference, ReferenceKind, Scope, ScopeLevel, UnitType,
};
pub use registry::{AnalyzerFactory, AnalyzerRegistry};
