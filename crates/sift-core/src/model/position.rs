//! Source positions.

use serde::Serialize;

use crate::error::AnalysisError;
use crate::validate;

/// A location in source text.
///
/// `line` and `column` are 1-based; `offset` is a 0-based character offset
/// from the start of the source unit. Whether all three lie within the
/// bounds of that unit is guaranteed by the converter that produced the
/// position, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    line: u32,
    column: u32,
    offset: usize,
}

impl Position {
    /// Creates a position, rejecting a zero line or column.
    pub fn new(line: u32, column: u32, offset: usize) -> Result<Self, AnalysisError> {
        if line < 1 {
            return Err(AnalysisError::invalid_argument("line", "must be positive"));
        }
        if column < 1 {
            return Err(AnalysisError::invalid_argument("column", "must be positive"));
        }
        Ok(Self {
            line,
            column,
            offset,
        })
    }

    /// Creates a position from 0-based line and column numbers, as parsers
    /// such as tree-sitter report them.
    pub fn from_zero_based(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line: line + 1,
            column: column + 1,
            offset,
        }
    }

    pub fn builder() -> PositionBuilder {
        PositionBuilder::default()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether this position comes before `other`: earlier line wins, else
    /// earlier column.
    pub fn is_before(&self, other: &Position) -> bool {
        if self.line != other.line {
            return self.line < other.line;
        }
        self.column < other.column
    }

    /// Whether this position comes after `other`.
    pub fn is_after(&self, other: &Position) -> bool {
        other.is_before(self)
    }
}

/// Builder for [`Position`]. `offset` defaults to 0.
#[derive(Debug, Default)]
pub struct PositionBuilder {
    line: Option<u32>,
    column: Option<u32>,
    offset: usize,
}

impl PositionBuilder {
    pub fn line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn build(self) -> Result<Position, AnalysisError> {
        let line = validate::require_present(self.line, "line")?;
        let column = validate::require_present(self.column, "column")?;
        Position::new(line, column, self.offset)
    }
}
