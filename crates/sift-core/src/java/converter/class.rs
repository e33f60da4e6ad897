//! Conversion of Java class, interface, and enum declarations.

use tree_sitter::Node;

use crate::error::AnalysisError;
use crate::model::{Definition, DefinitionKind, Position, Reference, ReferenceKind, ScopeLevel};
use crate::treesitter;

use super::doc::JavaDocumentationConverter;
use super::{declared_name, has_modifier, is_type_node, modifiers_of, scope_from_node};

/// A type mentioned by name in an extends/implements clause.
struct NamedType {
    name: String,
    position: Position,
}

/// Converts type-like declarations into definitions.
///
/// Type visibility collapses onto two tiers: `public` maps to the global
/// scope level, everything else to package level.
pub(crate) struct JavaClassConverter {
    docs: JavaDocumentationConverter,
}

impl JavaClassConverter {
    pub fn new() -> Self {
        Self {
            docs: JavaDocumentationConverter::new(),
        }
    }

    fn type_level(modifiers: &[String]) -> ScopeLevel {
        if has_modifier(modifiers, "public") {
            ScopeLevel::Global
        } else {
            ScopeLevel::Package
        }
    }

    pub fn convert_class(&self, node: &Node, content: &str) -> Result<Definition, AnalysisError> {
        let name = declared_name(node, content, "class declaration")?;
        let modifiers = modifiers_of(node, content);

        let mut references = Vec::new();
        let mut builder = Definition::builder()
            .name(&name)
            .kind(DefinitionKind::Type)
            .scope(scope_from_node(node, Self::type_level(&modifiers))?)
            .position(treesitter::start_position(node))
            .metadata("isAbstract", has_modifier(&modifiers, "abstract"));

        if let Some(superclass) = superclass_of(node, content) {
            builder = builder.metadata("superclass", superclass.name.clone());
            references.push(
                Reference::builder()
                    .kind(ReferenceKind::Extend)
                    .target_name(superclass.name)
                    .position(superclass.position)
                    .build()?,
            );
        }

        let interfaces = implemented_interfaces(node, content);
        builder = builder.metadata(
            "interfaces",
            interfaces
                .iter()
                .map(|interface| interface.name.clone())
                .collect::<Vec<_>>(),
        );
        for interface in interfaces {
            references.push(
                Reference::builder()
                    .kind(ReferenceKind::Implement)
                    .target_name(interface.name)
                    .position(interface.position)
                    .build()?,
            );
        }

        builder = builder.references(references);
        if let Some(documentation) = self.docs.convert_preceding(node, content)? {
            builder = builder.documentation(documentation);
        }
        builder.build()
    }

    pub fn convert_interface(
        &self,
        node: &Node,
        content: &str,
    ) -> Result<Definition, AnalysisError> {
        let name = declared_name(node, content, "interface declaration")?;
        let modifiers = modifiers_of(node, content);

        let mut builder = Definition::builder()
            .name(&name)
            .kind(DefinitionKind::Interface)
            .scope(scope_from_node(node, Self::type_level(&modifiers))?)
            .position(treesitter::start_position(node))
            .metadata(
                "superInterfaces",
                extended_interfaces(node, content)
                    .into_iter()
                    .map(|interface| interface.name)
                    .collect::<Vec<_>>(),
            );

        if let Some(documentation) = self.docs.convert_preceding(node, content)? {
            builder = builder.documentation(documentation);
        }
        builder.build()
    }

    pub fn convert_enum(&self, node: &Node, content: &str) -> Result<Definition, AnalysisError> {
        let name = declared_name(node, content, "enum declaration")?;
        let modifiers = modifiers_of(node, content);

        let mut builder = Definition::builder()
            .name(&name)
            .kind(DefinitionKind::Enum)
            .scope(scope_from_node(node, Self::type_level(&modifiers))?)
            .position(treesitter::start_position(node))
            .metadata("constants", enum_constants(node, content));

        if let Some(documentation) = self.docs.convert_preceding(node, content)? {
            builder = builder.documentation(documentation);
        }
        builder.build()
    }
}

/// The declared superclass, if any.
fn superclass_of(node: &Node, content: &str) -> Option<NamedType> {
    let clause = node.child_by_field_name("superclass")?;
    treesitter::named_children(&clause)
        .into_iter()
        .find(is_type_node)
        .map(|ty| named_type(&ty, content))
}

/// Types in the `implements` clause, in source order.
fn implemented_interfaces(node: &Node, content: &str) -> Vec<NamedType> {
    match node.child_by_field_name("interfaces") {
        Some(clause) => clause_types(&clause, content),
        None => Vec::new(),
    }
}

/// Types in an interface's `extends` clause, in source order.
fn extended_interfaces(node: &Node, content: &str) -> Vec<NamedType> {
    treesitter::named_children(node)
        .into_iter()
        .find(|child| child.kind() == "extends_interfaces")
        .map(|clause| clause_types(&clause, content))
        .unwrap_or_default()
}

fn clause_types(clause: &Node, content: &str) -> Vec<NamedType> {
    let mut types = Vec::new();
    for child in treesitter::named_children(clause) {
        if child.kind() == "type_list" {
            for ty in treesitter::named_children(&child) {
                if is_type_node(&ty) {
                    types.push(named_type(&ty, content));
                }
            }
        } else if is_type_node(&child) {
            types.push(named_type(&child, content));
        }
    }
    types
}

fn named_type(node: &Node, content: &str) -> NamedType {
    NamedType {
        name: treesitter::type_name(node, content),
        position: treesitter::start_position(node),
    }
}

fn enum_constants(node: &Node, content: &str) -> Vec<String> {
    let Some(body) = node.child_by_field_name("body") else {
        return Vec::new();
    };
    treesitter::named_children(&body)
        .into_iter()
        .filter(|child| child.kind() == "enum_constant")
        .filter_map(|constant| {
            constant
                .child_by_field_name("name")
                .map(|name| treesitter::node_text(&name, content).to_string())
        })
        .collect()
}
