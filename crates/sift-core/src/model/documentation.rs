//! Documentation attached to code units and definitions.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::AnalysisError;
use crate::model::{Metadata, Position};
use crate::validate;

/// How a documentation block was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentationFormat {
    /// Plain text.
    PlainText,
    /// Markdown.
    Markdown,
    /// Structured `/** … */` comment, Javadoc style.
    Javadoc,
    /// Structured comment, JSDoc style.
    Jsdoc,
    /// Docstring, Python style.
    DocString,
    /// Anything else.
    Other,
}

/// A structured documentation element such as `@param` or `@return`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentationTag {
    name: String,
    value: String,
    attributes: BTreeMap<String, String>,
}

impl DocumentationTag {
    pub fn builder() -> DocumentationTagBuilder {
        DocumentationTagBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

/// Builder for [`DocumentationTag`]. `value` defaults to the empty string.
#[derive(Debug, Default)]
pub struct DocumentationTagBuilder {
    name: Option<String>,
    value: String,
    attributes: BTreeMap<String, String>,
}

impl DocumentationTagBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<DocumentationTag, AnalysisError> {
        let name = validate::require_present(self.name, "tag name")?;
        validate::require_non_empty(&name, "tag name")?;
        Ok(DocumentationTag {
            name,
            value: self.value,
            attributes: self.attributes,
        })
    }
}

/// Free-text or structured-comment content with its ordered tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Documentation {
    description: String,
    format: DocumentationFormat,
    position: Option<Position>,
    tags: Vec<DocumentationTag>,
    metadata: Metadata,
}

impl Documentation {
    pub fn builder() -> DocumentationBuilder {
        DocumentationBuilder::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn format(&self) -> DocumentationFormat {
        self.format
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn tags(&self) -> &[DocumentationTag] {
        &self.tags
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Builder for [`Documentation`].
#[derive(Debug, Default)]
pub struct DocumentationBuilder {
    description: String,
    format: Option<DocumentationFormat>,
    position: Option<Position>,
    tags: Vec<DocumentationTag>,
    metadata: Metadata,
}

impl DocumentationBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn format(mut self, format: DocumentationFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn position(mut self, position: impl Into<Option<Position>>) -> Self {
        self.position = position.into();
        self
    }

    pub fn tag(mut self, tag: DocumentationTag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = DocumentationTag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Documentation, AnalysisError> {
        let format = validate::require_present(self.format, "documentation format")?;
        Ok(Documentation {
            description: self.description,
            format,
            position: self.position,
            tags: self.tags,
            metadata: self.metadata,
        })
    }
}
