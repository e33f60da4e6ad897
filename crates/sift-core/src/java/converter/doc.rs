//! Conversion of Javadoc blocks into documentation values.

use regex::Regex;
use tree_sitter::Node;

use crate::error::AnalysisError;
use crate::model::{Documentation, DocumentationFormat, DocumentationTag};
use crate::treesitter;

/// Block tags whose first word is an identifier (`@param name …`), carried
/// as the tag's `name` attribute.
const IDENTIFIER_TAGS: [&str; 3] = ["param", "throws", "exception"];

/// Converts `/** … */` comments into [`Documentation`] values with their
/// ordered block tags.
pub(crate) struct JavaDocumentationConverter {
    tag_line: Regex,
}

impl JavaDocumentationConverter {
    pub fn new() -> Self {
        Self {
            tag_line: Regex::new(r"^@([A-Za-z][A-Za-z0-9]*)\s*(.*)$").expect("tag pattern compiles"),
        }
    }

    /// Converts the Javadoc block immediately preceding `node`, if any.
    pub fn convert_preceding(
        &self,
        node: &Node,
        content: &str,
    ) -> Result<Option<Documentation>, AnalysisError> {
        match preceding_javadoc(node, content) {
            Some(comment) => Ok(Some(self.convert_javadoc(&comment, content)?)),
            None => Ok(None),
        }
    }

    /// Converts one Javadoc block comment node.
    pub fn convert_javadoc(
        &self,
        node: &Node,
        content: &str,
    ) -> Result<Documentation, AnalysisError> {
        let lines = comment_body(treesitter::node_text(node, content));

        let mut description = Vec::new();
        let mut tags = Vec::new();
        let mut current: Option<(String, Vec<String>)> = None;
        for line in lines {
            if let Some(captures) = self.tag_line.captures(&line) {
                if let Some((name, body)) = current.take() {
                    tags.push(build_tag(&name, &body)?);
                }
                current = Some((captures[1].to_string(), vec![captures[2].to_string()]));
            } else if let Some((_, body)) = current.as_mut() {
                if !line.is_empty() {
                    body.push(line);
                }
            } else if !line.is_empty() {
                description.push(line);
            }
        }
        if let Some((name, body)) = current.take() {
            tags.push(build_tag(&name, &body)?);
        }

        Documentation::builder()
            .description(description.join("\n"))
            .format(DocumentationFormat::Javadoc)
            .position(treesitter::start_position(node))
            .tags(tags)
            .build()
    }
}

/// Comment text with the `/** */` frame and leading asterisks stripped,
/// line by line.
fn comment_body(raw: &str) -> Vec<String> {
    raw.trim_start_matches("/**")
        .trim_end_matches("*/")
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim().to_string())
        .collect()
}

fn build_tag(name: &str, body: &[String]) -> Result<DocumentationTag, AnalysisError> {
    let text = body.join(" ").trim().to_string();
    let mut builder = DocumentationTag::builder().name(name);
    if IDENTIFIER_TAGS.contains(&name) {
        match text.split_once(char::is_whitespace) {
            Some((identifier, rest)) => {
                builder = builder.attribute("name", identifier).value(rest.trim());
            }
            None if !text.is_empty() => {
                builder = builder.attribute("name", text.as_str());
            }
            None => {}
        }
    } else {
        builder = builder.value(text);
    }
    builder.build()
}

/// The `/** … */` block directly above a declaration, with line comments
/// skipped on the way up.
pub(crate) fn preceding_javadoc<'t>(node: &Node<'t>, content: &str) -> Option<Node<'t>> {
    let mut sibling = node.prev_sibling();
    while let Some(candidate) = sibling {
        match candidate.kind() {
            "block_comment" => {
                return treesitter::node_text(&candidate, content)
                    .starts_with("/**")
                    .then_some(candidate);
            }
            "line_comment" => sibling = candidate.prev_sibling(),
            _ => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(source: &str) -> Documentation {
        let language = tree_sitter_java::LANGUAGE.into();
        let tree = treesitter::parse(&language, source).unwrap();
        let converter = JavaDocumentationConverter::new();
        let comment = find_block_comment(tree.root_node()).expect("source contains a javadoc");
        converter.convert_javadoc(&comment, source).unwrap()
    }

    fn find_block_comment(node: Node) -> Option<Node> {
        if node.kind() == "block_comment" {
            return Some(node);
        }
        let mut cursor = node.walk();
        let found = node.children(&mut cursor).find_map(find_block_comment);
        found
    }

    #[test]
    fn extracts_description_and_tags() {
        let doc = convert(
            "/**\n * Greets a person by name.\n *\n * @param name who to greet\n * @return the greeting\n */\nclass A {}",
        );
        assert_eq!(doc.description(), "Greets a person by name.");
        assert_eq!(doc.format(), DocumentationFormat::Javadoc);

        let tags = doc.tags();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name(), "param");
        assert_eq!(tags[0].value(), "who to greet");
        assert_eq!(tags[0].attributes().get("name").map(String::as_str), Some("name"));
        assert_eq!(tags[1].name(), "return");
        assert_eq!(tags[1].value(), "the greeting");
        assert!(tags[1].attributes().is_empty());
    }

    #[test]
    fn joins_multi_line_tag_bodies() {
        let doc = convert(
            "/**\n * Does things.\n * @param input the value,\n *        possibly empty\n */\nclass A {}",
        );
        assert_eq!(doc.tags()[0].value(), "the value, possibly empty");
    }

    #[test]
    fn records_the_comment_position() {
        let doc = convert("/** Top. */\nclass A {}");
        let position = doc.position().unwrap();
        assert_eq!(position.line(), 1);
        assert_eq!(position.column(), 1);
    }
}
