//! Top-level code units.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::error::AnalysisError;
use crate::model::{Definition, Documentation, Metadata};
use crate::validate;

/// How the analyzed source is organized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    /// A source file.
    File,
    /// A module.
    Module,
    /// A namespace.
    Namespace,
    /// A package.
    Package,
    /// A library or framework.
    Library,
    /// Anything else.
    Other,
}

/// The container handed to downstream consumers: one analyzed source unit
/// with its definitions, documentation, and metadata.
///
/// A unit exclusively owns its definitions and documentation. Dependency
/// edges are shared handles to units built elsewhere in the same analysis
/// run; since nothing mutates after construction, sharing carries no
/// lifetime hazards.
#[derive(Debug, Clone, Serialize)]
pub struct CodeUnit {
    id: String,
    name: String,
    #[serde(rename = "type")]
    unit_type: UnitType,
    definitions: Vec<Definition>,
    dependencies: Vec<Arc<CodeUnit>>,
    documentation: Option<Documentation>,
    metadata: Metadata,
}

impl CodeUnit {
    pub fn builder() -> CodeUnitBuilder {
        CodeUnitBuilder::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_type(&self) -> UnitType {
        self.unit_type
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn dependencies(&self) -> &[Arc<CodeUnit>] {
        &self.dependencies
    }

    pub fn documentation(&self) -> Option<&Documentation> {
        self.documentation.as_ref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl PartialEq for CodeUnit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CodeUnit {}

impl Hash for CodeUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Builder for [`CodeUnit`]. A fresh v4 uuid is minted when no `id` is
/// supplied.
#[derive(Debug, Default)]
pub struct CodeUnitBuilder {
    id: Option<String>,
    name: Option<String>,
    unit_type: Option<UnitType>,
    definitions: Vec<Definition>,
    dependencies: Vec<Arc<CodeUnit>>,
    documentation: Option<Documentation>,
    metadata: Metadata,
}

impl CodeUnitBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn unit_type(mut self, unit_type: UnitType) -> Self {
        self.unit_type = Some(unit_type);
        self
    }

    pub fn definition(mut self, definition: Definition) -> Self {
        self.definitions.push(definition);
        self
    }

    pub fn definitions(mut self, definitions: impl IntoIterator<Item = Definition>) -> Self {
        self.definitions.extend(definitions);
        self
    }

    pub fn dependency(mut self, dependency: Arc<CodeUnit>) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn dependencies(mut self, dependencies: impl IntoIterator<Item = Arc<CodeUnit>>) -> Self {
        self.dependencies.extend(dependencies);
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

    pub fn build(self) -> Result<CodeUnit, AnalysisError> {
        let name = validate::require_present(self.name, "name")?;
        validate::require_non_empty(&name, "name")?;
        let unit_type = validate::require_present(self.unit_type, "unit type")?;
        Ok(CodeUnit {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name,
            unit_type,
            definitions: self.definitions,
            dependencies: self.dependencies,
            documentation: self.documentation,
            metadata: self.metadata,
        })
    }
}
