//! Named constructs extracted from source code.

use std::hash::{Hash, Hasher};

use serde::Serialize;
use uuid::Uuid;

use crate::error::AnalysisError;
use crate::model::{Documentation, Metadata, Position, Reference, Scope};
use crate::validate;

/// What sort of construct a definition names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKind {
    /// Concrete type (class or equivalent).
    Type,
    /// Interface or trait-like contract.
    Interface,
    /// Enumeration.
    Enum,
    /// Function, method, or constructor.
    Function,
    /// Variable or constant.
    Variable,
    /// Module or namespace.
    Module,
    /// Property or field.
    Property,
    /// Parameter.
    Parameter,
    /// Anything else.
    Other,
}

/// A named construct found in a code unit.
///
/// Identity is the generated `id`; names need not be unique within a unit.
#[derive(Debug, Clone, Serialize)]
pub struct Definition {
    id: String,
    name: String,
    kind: DefinitionKind,
    scope: Scope,
    position: Position,
    references: Vec<Reference>,
    documentation: Option<Documentation>,
    metadata: Metadata,
}

impl Definition {
    pub fn builder() -> DefinitionBuilder {
        DefinitionBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub fn documentation(&self) -> Option<&Documentation> {
        self.documentation.as_ref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl PartialEq for Definition {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Definition {}

impl Hash for Definition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Builder for [`Definition`]. A fresh v4 uuid is minted when no `id` is
/// supplied.
#[derive(Debug, Default)]
pub struct DefinitionBuilder {
    id: Option<String>,
    name: Option<String>,
    kind: Option<DefinitionKind>,
    scope: Option<Scope>,
    position: Option<Position>,
    references: Vec<Reference>,
    documentation: Option<Documentation>,
    metadata: Metadata,
}

impl DefinitionBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(mut self, kind: DefinitionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    pub fn references(mut self, references: impl IntoIterator<Item = Reference>) -> Self {
        self.references.extend(references);
        self
    }

    pub fn documentation(mut self, documentation: impl Into<Option<Documentation>>) -> Self {
        self.documentation = documentation.into();
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Definition, AnalysisError> {
        let name = validate::require_present(self.name, "name")?;
        validate::require_non_empty(&name, "name")?;
        let kind = validate::require_present(self.kind, "kind")?;
        let scope = validate::require_present(self.scope, "scope")?;
        let position = validate::require_present(self.position, "position")?;
        Ok(Definition {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name,
            kind,
            scope,
            position,
            references: self.references,
            documentation: self.documentation,
            metadata: self.metadata,
        })
    }
}
