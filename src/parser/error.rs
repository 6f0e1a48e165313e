use thiserror::Error;

/// Errors that abort parsing of a catalog.
///
/// Line numbers are one-based.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A `m`-prefixed line whose key is not a known property
    #[error("Could not parse {key} at line {line}")]
    UnrecognizedProperty { key: String, line: usize },
    /// A quoted continuation line with no property to extend
    #[error("Continuation line without an active property at line {line}")]
    DanglingContinuation { line: usize },
    /// The line source could not be read
    #[error("Failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Returns the line the error was raised at, if it relates to a specific line.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedProperty { line, .. } | Self::DanglingContinuation { line } => {
                Some(*line)
            }
            Self::Io(_) => None,
        }
    }
}
