//! Name-only reference edges between definitions.

use serde::Serialize;

use crate::error::AnalysisError;
use crate::model::{Metadata, Position};
use crate::validate;

/// How one piece of code relates to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// Direct usage or call.
    Use,
    /// Modification of the target.
    Modify,
    /// Extension/inheritance.
    Extend,
    /// Implementation of an interface-like target.
    Implement,
    /// Import or include.
    Import,
    /// Anything else.
    Other,
}

/// A directed edge from the owning definition to another named entity.
///
/// The target is identified by name only. Resolving it to a concrete
/// [`Definition`](crate::model::Definition), when a consumer needs that, is
/// a downstream concern; keeping the edge unresolved avoids a global
/// resolution pass and entity cycles inside the core.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reference {
    kind: ReferenceKind,
    target_name: String,
    position: Option<Position>,
    metadata: Metadata,
}

impl Reference {
    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Builder for [`Reference`].
#[derive(Debug, Default)]
pub struct ReferenceBuilder {
    kind: Option<ReferenceKind>,
    target_name: Option<String>,
    position: Option<Position>,
    metadata: Metadata,
}

impl ReferenceBuilder {
    pub fn kind(mut self, kind: ReferenceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn target_name(mut self, target_name: impl Into<String>) -> Self {
        self.target_name = Some(target_name.into());
        self
    }

    pub fn position(mut self, position: impl Into<Option<Position>>) -> Self {
        self.position = position.into();
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Reference, AnalysisError> {
        let kind = validate::require_present(self.kind, "reference kind")?;
        let target_name = validate::require_present(self.target_name, "target name")?;
        validate::require_non_empty(&target_name, "target name")?;
        Ok(Reference {
            kind,
            target_name,
            position: self.position,
            metadata: self.metadata,
        })
    }
}
