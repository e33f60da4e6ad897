//! The analyzer façade contract.

use std::path::Path;

use crate::error::AnalysisError;
use crate::model::{CodeUnit, Definition, Documentation};

/// A language analyzer: a parser and a converter behind three operations.
///
/// Implementations hold only immutable configuration, so one instance can
/// serve concurrent callers over distinct files without locking. Both
/// extraction operations are pure projections of an already-built unit and
/// never fail.
pub trait CodeAnalyzer: Send + Sync {
    /// Parses a source file into a fully populated code unit.
    ///
    /// Fails with an I/O error when the file cannot be read, a parse error
    /// when the parser reports problems, or a state error when a structural
    /// assumption is violated during conversion. Never returns a partially
    /// populated unit.
    fn parse_file(&self, path: &Path) -> Result<CodeUnit, AnalysisError>;

    /// The unit's definitions, defensively copied.
    fn extract_definitions(&self, unit: &CodeUnit) -> Vec<Definition> {
        unit.definitions().to_vec()
    }

    /// The unit's documentation as a zero- or one-element sequence.
    fn extract_documentation(&self, unit: &CodeUnit) -> Vec<Documentation> {
        unit.documentation().cloned().into_iter().collect()
    }
}
