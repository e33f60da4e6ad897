//! Java analysis: tree-sitter parsing plus conversion to the IR.

mod converter;

pub use converter::JavaConverter;

use std::fs;
use std::path::Path;

use tracing::debug;
use tree_sitter::Language;

use crate::analyzer::CodeAnalyzer;
use crate::error::AnalysisError;
use crate::model::CodeUnit;
use crate::treesitter;

/// Analyzer façade for Java source files.
///
/// Holds only the grammar and the converter, both immutable; a fresh
/// tree-sitter parser is built per call, so a single instance can be shared
/// across threads.
pub struct JavaAnalyzer {
    language: Language,
    converter: JavaConverter,
}

impl JavaAnalyzer {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
            converter: JavaConverter::new(),
        }
    }
}

impl Default for JavaAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeAnalyzer for JavaAnalyzer {
    fn parse_file(&self, path: &Path) -> Result<CodeUnit, AnalysisError> {
        let content = fs::read_to_string(path).map_err(|source| AnalysisError::io(path, source))?;
        debug!(path = %path.display(), bytes = content.len(), "parsing java source");

        let tree = treesitter::parse(&self.language, &content)?;
        let problems = treesitter::syntax_problems(&tree);
        if !problems.is_empty() {
            return Err(AnalysisError::parse(path.display().to_string(), problems));
        }

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown");
        self.converter.convert(&tree, &content, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DefinitionKind, ReferenceKind, ScopeLevel, UnitType};
    use std::io::Write;

    fn write_source(dir: &tempfile::TempDir, name: &str, source: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(source.as_bytes()).unwrap();
        path
    }

    const EXAMPLE: &str = r#"package com.example;

public class Example {
    private final String name;

    public Example(String name) {
        this.name = name;
    }

    public String getName() {
        return name;
    }
}
"#;

    #[test]
    fn parses_a_valid_java_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "Example.java", EXAMPLE);

        let analyzer = JavaAnalyzer::new();
        let unit = analyzer.parse_file(&path).unwrap();

        assert_eq!(unit.unit_type(), UnitType::File);
        assert_eq!(unit.name(), "Example.java");
        assert_eq!(unit.metadata()["packageName"], "com.example");

        let classes: Vec<_> = unit
            .definitions()
            .iter()
            .filter(|definition| definition.kind() == DefinitionKind::Type)
            .collect();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name(), "Example");
        assert_eq!(classes[0].metadata()["isAbstract"], false);
        assert_eq!(classes[0].scope().level(), ScopeLevel::Global);

        let functions: Vec<_> = unit
            .definitions()
            .iter()
            .filter(|definition| definition.kind() == DefinitionKind::Function)
            .collect();
        assert_eq!(functions.len(), 2);
        let constructor = functions
            .iter()
            .find(|definition| definition.metadata().contains_key("isConstructor"))
            .unwrap();
        assert_eq!(constructor.name(), "Example");
        assert_eq!(constructor.metadata()["isConstructor"], true);
        assert_eq!(
            constructor.metadata()["parameters"],
            serde_json::json!(["name"])
        );
        let accessor = functions
            .iter()
            .find(|definition| definition.name() == "getName")
            .unwrap();
        assert_eq!(accessor.metadata()["returnType"], "String");
        assert_eq!(accessor.metadata()["isStatic"], false);
    }

    #[test]
    fn extracts_fields_as_properties() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "Constants.java",
            "class Constants {\n    private static final int LIMIT = 10;\n    int a, b;\n}\n",
        );

        let unit = JavaAnalyzer::new().parse_file(&path).unwrap();
        let properties: Vec<_> = unit
            .definitions()
            .iter()
            .filter(|definition| definition.kind() == DefinitionKind::Property)
            .collect();
        assert_eq!(properties.len(), 3);

        let limit = properties
            .iter()
            .find(|definition| definition.name() == "LIMIT")
            .unwrap();
        assert_eq!(limit.metadata()["type"], "int");
        assert_eq!(limit.metadata()["isStatic"], true);
        assert_eq!(limit.metadata()["isFinal"], true);
        assert_eq!(limit.scope().level(), ScopeLevel::Type);

        let names: Vec<_> = properties
            .iter()
            .map(|definition| definition.name())
            .collect();
        assert_eq!(names, ["LIMIT", "a", "b"]);
    }

    #[test]
    fn records_an_extend_reference_for_the_superclass() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "Derived.java",
            "public class Derived extends Base implements Comparable, Serializable {}\n",
        );

        let unit = JavaAnalyzer::new().parse_file(&path).unwrap();
        let class = &unit.definitions()[0];
        assert_eq!(class.metadata()["superclass"], "Base");
        assert_eq!(
            class.metadata()["interfaces"],
            serde_json::json!(["Comparable", "Serializable"])
        );

        let extends: Vec<_> = class
            .references()
            .iter()
            .filter(|reference| reference.kind() == ReferenceKind::Extend)
            .collect();
        assert_eq!(extends.len(), 1);
        assert_eq!(extends[0].target_name(), "Base");

        let implements: Vec<_> = class
            .references()
            .iter()
            .filter(|reference| reference.kind() == ReferenceKind::Implement)
            .map(|reference| reference.target_name())
            .collect();
        assert_eq!(implements, ["Comparable", "Serializable"]);
    }

    #[test]
    fn converts_interfaces_and_enums() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "Shapes.java",
            "interface Shape extends Drawable {}\nenum Color { RED, GREEN, BLUE }\n",
        );

        let unit = JavaAnalyzer::new().parse_file(&path).unwrap();
        let interface = unit
            .definitions()
            .iter()
            .find(|definition| definition.kind() == DefinitionKind::Interface)
            .unwrap();
        assert_eq!(interface.name(), "Shape");
        assert_eq!(
            interface.metadata()["superInterfaces"],
            serde_json::json!(["Drawable"])
        );
        assert_eq!(interface.scope().level(), ScopeLevel::Package);

        let color = unit
            .definitions()
            .iter()
            .find(|definition| definition.kind() == DefinitionKind::Enum)
            .unwrap();
        assert_eq!(
            color.metadata()["constants"],
            serde_json::json!(["RED", "GREEN", "BLUE"])
        );
    }

    #[test]
    fn extracts_documentation() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "Documented.java",
            r#"package com.example;

/**
 * Example class demonstrating documentation extraction.
 */
public class Documented {
    /**
     * Gets the person's name.
     * @return the name
     */
    public String getName() {
        return "";
    }
}
"#,
        );

        let analyzer = JavaAnalyzer::new();
        let unit = analyzer.parse_file(&path).unwrap();

        let docs = analyzer.extract_documentation(&unit);
        assert_eq!(docs.len(), 1);
        assert!(docs[0]
            .description()
            .contains("Example class demonstrating documentation extraction"));

        let class = unit
            .definitions()
            .iter()
            .find(|definition| definition.kind() == DefinitionKind::Type)
            .unwrap();
        assert!(class.documentation().is_some());

        let method = unit
            .definitions()
            .iter()
            .find(|definition| definition.name() == "getName")
            .unwrap();
        let method_doc = method.documentation().unwrap();
        assert_eq!(method_doc.description(), "Gets the person's name.");
        assert_eq!(method_doc.tags()[0].name(), "return");
    }

    #[test]
    fn records_imports_in_source_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "Imports.java",
            "package p;\nimport java.util.List;\nimport java.util.Map;\nclass C {}\n",
        );

        let unit = JavaAnalyzer::new().parse_file(&path).unwrap();
        assert_eq!(
            unit.metadata()["imports"],
            serde_json::json!(["java.util.List", "java.util.Map"])
        );
    }

    #[test]
    fn fails_with_a_parse_error_on_invalid_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "Invalid.java", "this is not valid java code");

        let err = JavaAnalyzer::new().parse_file(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse { .. }));
    }

    #[test]
    fn fails_with_an_io_error_on_a_missing_file() {
        let err = JavaAnalyzer::new()
            .parse_file(Path::new("/nonexistent/Missing.java"))
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }

    #[test]
    fn conversion_is_idempotent_up_to_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "Example.java", EXAMPLE);

        let first = JavaAnalyzer::new().parse_file(&path).unwrap();
        let second = JavaAnalyzer::new().parse_file(&path).unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(first.name(), second.name());
        assert_eq!(first.metadata(), second.metadata());
        assert_eq!(first.definitions().len(), second.definitions().len());
        for (a, b) in first.definitions().iter().zip(second.definitions()) {
            assert_ne!(a.id(), b.id());
            assert_eq!(a.name(), b.name());
            assert_eq!(a.kind(), b.kind());
            assert_eq!(a.position(), b.position());
            assert_eq!(a.scope(), b.scope());
            assert_eq!(a.references(), b.references());
            assert_eq!(a.documentation(), b.documentation());
            assert_eq!(a.metadata(), b.metadata());
        }
    }

    #[test]
    fn extract_definitions_is_a_defensive_copy() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "Example.java", EXAMPLE);

        let analyzer = JavaAnalyzer::new();
        let unit = analyzer.parse_file(&path).unwrap();
        let mut extracted = analyzer.extract_definitions(&unit);
        let before = unit.definitions().len();
        extracted.clear();
        assert_eq!(unit.definitions().len(), before);
    }
}
