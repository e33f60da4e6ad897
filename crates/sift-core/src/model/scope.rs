//! Lexical scopes.

use serde::Serialize;

use crate::error::AnalysisError;
use crate::model::{Metadata, Position};
use crate::validate;

/// Visibility and nesting tier of a scope, ranked across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeLevel {
    /// Global or module level.
    Global,
    /// Package or namespace level.
    Package,
    /// Type (class/interface) level.
    Type,
    /// Function or method level.
    Function,
    /// Block level.
    Block,
    /// Anything else.
    Other,
}

/// The span and visibility tier a definition lives in.
///
/// Every child scope's span lies within `[start, end]`; converters guarantee
/// this, the type only rejects a start after its end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scope {
    level: ScopeLevel,
    start: Position,
    end: Position,
    children: Vec<Scope>,
    metadata: Metadata,
}

impl Scope {
    pub fn builder() -> ScopeBuilder {
        ScopeBuilder::default()
    }

    pub fn level(&self) -> ScopeLevel {
        self.level
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn children(&self) -> &[Scope] {
        &self.children
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Builder for [`Scope`].
#[derive(Debug, Default)]
pub struct ScopeBuilder {
    level: Option<ScopeLevel>,
    start: Option<Position>,
    end: Option<Position>,
    children: Vec<Scope>,
    metadata: Metadata,
}

impl ScopeBuilder {
    pub fn level(mut self, level: ScopeLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn start(mut self, start: Position) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: Position) -> Self {
        self.end = Some(end);
        self
    }

    pub fn child(mut self, child: Scope) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Scope>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<Scope, AnalysisError> {
        let level = validate::require_present(self.level, "scope level")?;
        let start = validate::require_present(self.start, "scope start")?;
        let end = validate::require_present(self.end, "scope end")?;
        if start.is_after(&end) {
            return Err(AnalysisError::invalid_argument(
                "scope",
                "start must not be after end",
            ));
        }
        Ok(Scope {
            level,
            start,
            end,
            children: self.children,
            metadata: self.metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(line: u32, column: u32) -> Position {
        Position::new(line, column, 0).unwrap()
    }

    #[test]
    fn rejects_a_start_after_its_end() {
        let result = Scope::builder()
            .level(ScopeLevel::Type)
            .start(position(5, 1))
            .end(position(2, 1))
            .build();
        assert!(result.is_err());

        let result = Scope::builder()
            .level(ScopeLevel::Type)
            .start(position(2, 8))
            .end(position(2, 3))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn accepts_an_empty_span() {
        let scope = Scope::builder()
            .level(ScopeLevel::Block)
            .start(position(2, 3))
            .end(position(2, 3))
            .build()
            .unwrap();
        assert_eq!(scope.level(), ScopeLevel::Block);
    }

    #[test]
    fn copies_children_out_of_the_callers_hands() {
        let child = Scope::builder()
            .level(ScopeLevel::Block)
            .start(position(2, 1))
            .end(position(3, 1))
            .build()
            .unwrap();
        let mut supplied = vec![child.clone()];

        let scope = Scope::builder()
            .level(ScopeLevel::Function)
            .start(position(1, 1))
            .end(position(4, 1))
            .children(supplied.clone())
            .build()
            .unwrap();

        supplied.clear();
        assert_eq!(scope.children(), &[child]);
    }

    #[test]
    fn defaults_collections_to_empty() {
        let scope = Scope::builder()
            .level(ScopeLevel::Global)
            .start(position(1, 1))
            .end(position(1, 1))
            .build()
            .unwrap();
        assert!(scope.children().is_empty());
        assert!(scope.metadata().is_empty());
    }
}
