use thiserror::Error;

/// Errors raised while interpreting user-supplied names.
///
/// The transforms themselves never fail; only the names used to select them do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MultitoolError {
    #[error("Unknown case style: {0} (try camel, snake, kebab, title, upper or lower)")]
    UnknownCaseStyle(String),

    #[error("Unknown line operation: {0} (try sort-az, sort-za, reverse, remove-empty, trim or dedup)")]
    UnknownLineOp(String),

    #[error("Unknown operation: {0} (run `multitool list` to see them all)")]
    UnknownOperation(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),
}
