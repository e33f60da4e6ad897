//! Analyzer registry keyed by file extension.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::trace;

use crate::analyzer::CodeAnalyzer;
use crate::java::JavaAnalyzer;

/// Builds an analyzer façade for a source path.
pub type AnalyzerFactory = Arc<dyn Fn(&Path) -> Arc<dyn CodeAnalyzer> + Send + Sync>;

/// Maps case-insensitive file extensions to analyzer factories.
///
/// Built-in languages are registered on creation; embedding tooling layers
/// more on with [`register`](Self::register). Registration takes `&mut
/// self`, so interleaving it with resolution requires external
/// serialization (a lock around the registry); resolution alone is safe to
/// share.
pub struct AnalyzerRegistry {
    factories: HashMap<String, AnalyzerFactory>,
}

impl AnalyzerRegistry {
    /// Creates a registry with all built-in analyzers registered.
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register(
            "java",
            Arc::new(|_path: &Path| Arc::new(JavaAnalyzer::new()) as Arc<dyn CodeAnalyzer>),
        );
        registry
    }

    /// Registers a factory for an extension, replacing any existing one.
    pub fn register(&mut self, extension: &str, factory: AnalyzerFactory) {
        self.factories.insert(extension.to_lowercase(), factory);
    }

    /// Resolves an analyzer for the given file, or nothing when no factory
    /// is registered for its extension.
    pub fn resolve(&self, path: &Path) -> Option<Arc<dyn CodeAnalyzer>> {
        let extension = Self::extension_of(path);
        trace!(path = %path.display(), extension, "resolving analyzer");
        self.factories.get(&extension).map(|factory| factory(path))
    }

    /// Whether an analyzer is registered for the extension.
    pub fn supports(&self, extension: &str) -> bool {
        self.factories.contains_key(&extension.to_lowercase())
    }

    /// All registered extensions.
    pub fn extensions(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// The text after the last `.` of the file name, lowercased; empty when
    /// there is no dot or the dot leads the name.
    fn extension_of(path: &Path) -> String {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("");
        match file_name.rfind('.') {
            Some(index) if index > 0 => file_name[index + 1..].to_lowercase(),
            _ => String::new(),
        }
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::model::CodeUnit;

    struct StubAnalyzer;

    impl CodeAnalyzer for StubAnalyzer {
        fn parse_file(&self, _path: &Path) -> Result<CodeUnit, AnalysisError> {
            Err(AnalysisError::state("stub analyzer"))
        }
    }

    fn stub_factory() -> AnalyzerFactory {
        Arc::new(|_path: &Path| Arc::new(StubAnalyzer) as Arc<dyn CodeAnalyzer>)
    }

    #[test]
    fn has_java_registered_by_default() {
        let registry = AnalyzerRegistry::new();
        assert!(registry.supports("java"));
        assert!(registry.resolve(Path::new("Example.java")).is_some());
    }

    #[test]
    fn resolves_registered_extensions_only() {
        let mut registry = AnalyzerRegistry::new();
        registry.register("xx", stub_factory());

        assert!(registry.resolve(Path::new("a.xx")).is_some());
        assert!(registry.resolve(Path::new("a.yy")).is_none());
    }

    #[test]
    fn matches_extensions_case_insensitively() {
        let mut registry = AnalyzerRegistry::new();
        registry.register("XX", stub_factory());

        assert!(registry.resolve(Path::new("A.XX")).is_some());
        assert!(registry.resolve(Path::new("a.xx")).is_some());
        assert!(registry.supports("Xx"));
    }

    #[test]
    fn dotless_and_dotfile_names_have_no_extension() {
        let registry = AnalyzerRegistry::new();
        assert!(registry.resolve(Path::new("Makefile")).is_none());
        assert!(registry.resolve(Path::new(".java")).is_none());
    }

    #[test]
    fn registering_again_overwrites() {
        let mut registry = AnalyzerRegistry::new();
        registry.register("xx", stub_factory());
        registry.register("xx", stub_factory());
        assert_eq!(
            registry.extensions().iter().filter(|e| **e == "xx").count(),
            1
        );
    }
}
