//! Tree-sitter plumbing shared across language analyzers.

use tree_sitter::{Language, LanguageError, Node, Parser as TsParser, Tree};

use crate::error::AnalysisError;
use crate::model::Position;
use crate::validate;

/// Parses source text with a fresh parser instance.
///
/// A parser is cheap to build and holding one would make the analyzer
/// `&mut self`; building per call keeps façades shareable across threads.
pub fn parse(language: &Language, content: &str) -> Result<Tree, AnalysisError> {
    validate::safe_execute(
        || {
            let mut parser = TsParser::new();
            parser.set_language(language)?;
            Ok::<Option<Tree>, LanguageError>(parser.parse(content, None))
        },
        "tree-sitter produced no syntax tree",
    )
}

/// Collects a diagnostic per syntax error in the tree, in tree order.
/// Empty when the parse succeeded cleanly.
pub fn syntax_problems(tree: &Tree) -> Vec<String> {
    let mut problems = Vec::new();
    if tree.root_node().has_error() {
        collect_problems(tree.root_node(), &mut problems);
    }
    problems
}

fn collect_problems(node: Node, problems: &mut Vec<String>) {
    let start = start_position(&node);
    if node.is_error() {
        problems.push(format!(
            "syntax error at {}:{}",
            start.line(),
            start.column()
        ));
        return;
    }
    if node.is_missing() {
        problems.push(format!(
            "missing {} at {}:{}",
            node.kind(),
            start.line(),
            start.column()
        ));
        return;
    }
    if !node.has_error() {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_problems(child, problems);
    }
}

/// The source text covered by a node.
pub fn node_text<'a>(node: &Node, content: &'a str) -> &'a str {
    &content[node.byte_range()]
}

/// A node's start as a 1-based model position.
pub fn start_position(node: &Node) -> Position {
    let point = node.start_position();
    Position::from_zero_based(point.row as u32, point.column as u32, node.start_byte())
}

/// A node's end as a 1-based model position.
pub fn end_position(node: &Node) -> Position {
    let point = node.end_position();
    Position::from_zero_based(point.row as u32, point.column as u32, node.end_byte())
}

/// All named children of a node.
pub fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// The trailing simple name of a type node, with generic arguments and
/// qualifying segments stripped (`List<String>` → `List`, `a.b.C` → `C`).
pub fn type_name(node: &Node, content: &str) -> String {
    match node.kind() {
        "generic_type" => named_children(node)
            .first()
            .map(|inner| type_name(inner, content))
            .unwrap_or_else(|| node_text(node, content).to_string()),
        "scoped_type_identifier" => named_children(node)
            .iter()
            .rev()
            .find(|child| child.kind() == "type_identifier")
            .map(|child| node_text(child, content).to_string())
            .unwrap_or_else(|| node_text(node, content).to_string()),
        _ => node_text(node, content).to_string(),
    }
}
