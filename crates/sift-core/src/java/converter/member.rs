//! Conversion of Java methods, constructors, and fields.

use tree_sitter::Node;

use crate::error::AnalysisError;
use crate::model::{Definition, DefinitionKind, ScopeLevel};
use crate::treesitter;

use super::doc::JavaDocumentationConverter;
use super::{declared_name, has_modifier, modifiers_of, scope_from_node};

/// Converts the members of a concrete class into definitions.
///
/// Member visibility maps onto three tiers: `public` is global, `private`
/// is type level, everything else package level.
pub(crate) struct JavaMemberConverter {
    docs: JavaDocumentationConverter,
}

impl JavaMemberConverter {
    pub fn new() -> Self {
        Self {
            docs: JavaDocumentationConverter::new(),
        }
    }

    fn member_level(modifiers: &[String]) -> ScopeLevel {
        if has_modifier(modifiers, "public") {
            ScopeLevel::Global
        } else if has_modifier(modifiers, "private") {
            ScopeLevel::Type
        } else {
            ScopeLevel::Package
        }
    }

    pub fn convert_method(&self, node: &Node, content: &str) -> Result<Definition, AnalysisError> {
        let name = declared_name(node, content, "method declaration")?;
        let modifiers = modifiers_of(node, content);
        let return_type = node
            .child_by_field_name("type")
            .map(|ty| treesitter::node_text(&ty, content).to_string())
            .ok_or_else(|| {
                AnalysisError::state(format!("method {name} has no return type node"))
            })?;

        let mut builder = Definition::builder()
            .name(&name)
            .kind(DefinitionKind::Function)
            .scope(scope_from_node(node, Self::member_level(&modifiers))?)
            .position(treesitter::start_position(node))
            .metadata("returnType", return_type)
            .metadata("parameters", parameter_names(node, content))
            .metadata("isStatic", has_modifier(&modifiers, "static"));

        if let Some(documentation) = self.docs.convert_preceding(node, content)? {
            builder = builder.documentation(documentation);
        }
        builder.build()
    }

    pub fn convert_constructor(
        &self,
        node: &Node,
        content: &str,
    ) -> Result<Definition, AnalysisError> {
        let name = declared_name(node, content, "constructor declaration")?;
        let modifiers = modifiers_of(node, content);

        let mut builder = Definition::builder()
            .name(&name)
            .kind(DefinitionKind::Function)
            .scope(scope_from_node(node, Self::member_level(&modifiers))?)
            .position(treesitter::start_position(node))
            .metadata("isConstructor", true)
            .metadata("parameters", parameter_names(node, content));

        if let Some(documentation) = self.docs.convert_preceding(node, content)? {
            builder = builder.documentation(documentation);
        }
        builder.build()
    }

    /// One definition per declarator in a field declaration.
    pub fn convert_fields(
        &self,
        node: &Node,
        content: &str,
    ) -> Result<Vec<Definition>, AnalysisError> {
        let modifiers = modifiers_of(node, content);
        let level = Self::member_level(&modifiers);
        let declared_type = node
            .child_by_field_name("type")
            .map(|ty| treesitter::node_text(&ty, content).to_string())
            .ok_or_else(|| AnalysisError::state("field declaration has no type node"))?;
        let documentation = self.docs.convert_preceding(node, content)?;

        let mut definitions = Vec::new();
        for declarator in treesitter::named_children(node) {
            if declarator.kind() != "variable_declarator" {
                continue;
            }
            let name = declared_name(&declarator, content, "field declarator")?;
            let mut builder = Definition::builder()
                .name(&name)
                .kind(DefinitionKind::Property)
                .scope(scope_from_node(node, level)?)
                .position(treesitter::start_position(&declarator))
                .metadata("type", declared_type.clone())
                .metadata("isStatic", has_modifier(&modifiers, "static"))
                .metadata("isFinal", has_modifier(&modifiers, "final"));
            if let Some(documentation) = documentation.clone() {
                builder = builder.documentation(documentation);
            }
            definitions.push(builder.build()?);
        }
        Ok(definitions)
    }
}

/// Declared parameter names, in order.
fn parameter_names(node: &Node, content: &str) -> Vec<String> {
    let Some(parameters) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };
    treesitter::named_children(&parameters)
        .into_iter()
        .filter(|parameter| matches!(parameter.kind(), "formal_parameter" | "spread_parameter"))
        .filter_map(|parameter| parameter_name(&parameter, content))
        .collect()
}

fn parameter_name(node: &Node, content: &str) -> Option<String> {
    if let Some(name) = node.child_by_field_name("name") {
        return Some(treesitter::node_text(&name, content).to_string());
    }
    // spread parameters nest their name inside a declarator
    treesitter::named_children(node)
        .into_iter()
        .find(|child| child.kind() == "variable_declarator")
        .and_then(|declarator| declarator.child_by_field_name("name"))
        .map(|name| treesitter::node_text(&name, content).to_string())
}
