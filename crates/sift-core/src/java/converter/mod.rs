//! Conversion of parsed Java trees into the language-agnostic model.

mod class;
mod doc;
mod member;

use tree_sitter::{Node, Tree};

use tracing::{debug, trace};

use crate::error::AnalysisError;
use crate::model::{CodeUnit, Definition, Scope, ScopeLevel, UnitType};
use crate::{treesitter, validate};

use class::JavaClassConverter;
use doc::JavaDocumentationConverter;
use member::JavaMemberConverter;

/// Converts a parsed Java compilation unit into a [`CodeUnit`], using
/// specialized converters per declaration kind.
///
/// Conversion either fully succeeds or fails with no partial unit: every
/// error from a sub-converter aborts the call.
pub struct JavaConverter {
    classes: JavaClassConverter,
    members: JavaMemberConverter,
    docs: JavaDocumentationConverter,
}

impl JavaConverter {
    pub fn new() -> Self {
        Self {
            classes: JavaClassConverter::new(),
            members: JavaMemberConverter::new(),
            docs: JavaDocumentationConverter::new(),
        }
    }

    /// Converts a compilation unit. `file_name` becomes the unit name.
    ///
    /// Any failure below is re-raised as a state error carrying this
    /// context, with the original message chained.
    pub fn convert(
        &self,
        tree: &Tree,
        content: &str,
        file_name: &str,
    ) -> Result<CodeUnit, AnalysisError> {
        self.convert_unit(tree, content, file_name)
            .map_err(|err| AnalysisError::state_with("failed to convert compilation unit", err))
    }

    fn convert_unit(
        &self,
        tree: &Tree,
        content: &str,
        file_name: &str,
    ) -> Result<CodeUnit, AnalysisError> {
        let root = tree.root_node();

        let mut definitions = Vec::new();
        self.collect_definitions(root, content, &mut definitions)?;

        let documentation = match find_first_javadoc(root, content) {
            Some(comment) => Some(self.docs.convert_javadoc(&comment, content)?),
            None => None,
        };

        let (package_name, imports) = file_metadata(root, content);
        debug!(
            definitions = definitions.len(),
            package = %package_name,
            "converted java compilation unit"
        );

        CodeUnit::builder()
            .name(file_name)
            .unit_type(UnitType::File)
            .definitions(definitions)
            .documentation(documentation)
            .metadata("packageName", package_name)
            .metadata("imports", imports)
            .build()
    }

    /// Walks the tree for type-like declarations in source order. Concrete
    /// classes additionally contribute their methods, constructors, and
    /// fields; nested and local types are picked up by the recursion.
    fn collect_definitions(
        &self,
        node: Node,
        content: &str,
        out: &mut Vec<Definition>,
    ) -> Result<(), AnalysisError> {
        for child in treesitter::named_children(&node) {
            match child.kind() {
                "class_declaration" => {
                    out.push(self.classes.convert_class(&child, content)?);
                    if let Some(body) = child.child_by_field_name("body") {
                        self.collect_members(&body, content, out)?;
                        self.collect_definitions(body, content, out)?;
                    }
                }
                "interface_declaration" => {
                    out.push(self.classes.convert_interface(&child, content)?);
                    if let Some(body) = child.child_by_field_name("body") {
                        self.collect_definitions(body, content, out)?;
                    }
                }
                "enum_declaration" => {
                    out.push(self.classes.convert_enum(&child, content)?);
                    if let Some(body) = child.child_by_field_name("body") {
                        self.collect_definitions(body, content, out)?;
                    }
                }
                _ => self.collect_definitions(child, content, out)?,
            }
        }
        Ok(())
    }

    fn collect_members(
        &self,
        body: &Node,
        content: &str,
        out: &mut Vec<Definition>,
    ) -> Result<(), AnalysisError> {
        for member in treesitter::named_children(body) {
            match member.kind() {
                "method_declaration" => {
                    out.push(self.members.convert_method(&member, content)?);
                }
                "constructor_declaration" => {
                    out.push(self.members.convert_constructor(&member, content)?);
                }
                "field_declaration" => {
                    out.extend(self.members.convert_fields(&member, content)?);
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl Default for JavaConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Package name (empty when undeclared) and imported names in source order.
fn file_metadata(root: Node, content: &str) -> (String, Vec<String>) {
    let mut package_name = String::new();
    let mut imports = Vec::new();
    for child in treesitter::named_children(&root) {
        match child.kind() {
            "package_declaration" => {
                if let Some(name) = declared_path(&child, content) {
                    package_name = name;
                }
            }
            "import_declaration" => {
                if let Some(name) = declared_path(&child, content) {
                    imports.push(name);
                }
            }
            _ => {}
        }
    }
    (package_name, imports)
}

/// The dotted name inside a package or import declaration.
fn declared_path(node: &Node, content: &str) -> Option<String> {
    treesitter::named_children(node)
        .into_iter()
        .find(|child| matches!(child.kind(), "identifier" | "scoped_identifier"))
        .map(|name| treesitter::node_text(&name, content).to_string())
}

/// The first `/** … */` block in tree order, if any.
fn find_first_javadoc<'t>(node: Node<'t>, content: &str) -> Option<Node<'t>> {
    if node.kind() == "block_comment" && treesitter::node_text(&node, content).starts_with("/**") {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_first_javadoc(child, content) {
            return Some(found);
        }
    }
    None
}

/// A scope spanning the declaration node.
pub(crate) fn scope_from_node(node: &Node, level: ScopeLevel) -> Result<Scope, AnalysisError> {
    Scope::builder()
        .level(level)
        .start(treesitter::start_position(node))
        .end(treesitter::end_position(node))
        .build()
}

/// The declaration's `name` field, or a state error naming the violated
/// assumption.
pub(crate) fn declared_name(
    node: &Node,
    content: &str,
    what: &str,
) -> Result<String, AnalysisError> {
    let name = node
        .child_by_field_name("name")
        .map(|name| treesitter::node_text(&name, content).to_string())
        .ok_or_else(|| AnalysisError::state(format!("{what} has no name node")))?;
    if !validate::is_valid_identifier(&name) {
        trace!(name = %name, what, "extracted name is not a plain identifier");
    }
    Ok(name)
}

/// Modifier keywords on a declaration, annotations excluded.
pub(crate) fn modifiers_of(node: &Node, content: &str) -> Vec<String> {
    let mut modifiers = Vec::new();
    for child in treesitter::named_children(node) {
        if child.kind() != "modifiers" {
            continue;
        }
        let mut cursor = child.walk();
        for modifier in child.children(&mut cursor) {
            let text = treesitter::node_text(&modifier, content);
            if !text.starts_with('@') {
                modifiers.push(text.to_string());
            }
        }
    }
    modifiers
}

pub(crate) fn has_modifier(modifiers: &[String], name: &str) -> bool {
    modifiers.iter().any(|modifier| modifier == name)
}

pub(crate) fn is_type_node(node: &Node) -> bool {
    matches!(
        node.kind(),
        "type_identifier" | "generic_type" | "scoped_type_identifier"
    )
}
