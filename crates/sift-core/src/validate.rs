//! Shared precondition checks used by model builders and converters.

use crate::error::AnalysisError;

/// Fails with an invalid-argument error when `value` is empty or all
/// whitespace.
pub fn require_non_empty(value: &str, field: &str) -> Result<(), AnalysisError> {
    if value.trim().is_empty() {
        return Err(AnalysisError::invalid_argument(field, "must not be empty"));
    }
    Ok(())
}

/// Unwraps a required field, failing with an invalid-argument error when it
/// was never supplied.
pub fn require_present<T>(value: Option<T>, field: &str) -> Result<T, AnalysisError> {
    value.ok_or_else(|| AnalysisError::invalid_argument(field, "is required"))
}

/// Whether `name` is a plain identifier: a letter or underscore followed by
/// letters, digits, or underscores.
///
/// Advisory only. Converters use this to sanity-check extracted names before
/// trusting them in cross-reference lookups; the value model itself does not
/// enforce it.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Runs an operation that may produce nothing or fail, folding both outcomes
/// into a state error that carries `context`.
///
/// Used at conversion boundaries to turn "missing data" and "unexpected
/// failure" into the one error channel the converter contract promises.
pub fn safe_execute<T, E, F>(operation: F, context: &str) -> Result<T, AnalysisError>
where
    F: FnOnce() -> Result<Option<T>, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match operation() {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(AnalysisError::state(context)),
        Err(source) => Err(AnalysisError::state_with(context, source)),
    }
}
