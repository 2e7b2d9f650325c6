use thiserror::Error;

use crate::Position;

/// Errors reported by the fallible convenience operations of
/// [`Scanner`](crate::Scanner) and [`Chain`](crate::Chain).
///
/// The core scanning operations never fail this way: they signal end of
/// input with `None`, a refused backup with `false`, and a failed match with
/// a zero count.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A match required via [`Chain::require`](crate::Chain::require)
    /// consumed nothing.
    #[error("expected match at {line}:{column}")]
    Unmatched {
        /// Line of the last consumed code unit.
        line: usize,
        /// Column of the last consumed code unit.
        column: usize,
    },
    /// The lexeme was requested as text but is not UTF-8.
    #[error("lexeme is not valid UTF-8 after {valid_up_to} bytes at {line}:{column}")]
    InvalidUtf8 {
        /// Line of the last consumed code unit.
        line: usize,
        /// Column of the last consumed code unit.
        column: usize,
        /// Length of the longest valid UTF-8 prefix of the lexeme.
        valid_up_to: usize,
    },
}

impl ScanError {
    pub(crate) fn unmatched(at: Position) -> Self {
        ScanError::Unmatched {
            line: at.line,
            column: at.column,
        }
    }

    pub(crate) fn invalid_utf8(at: Position, err: core::str::Utf8Error) -> Self {
        ScanError::InvalidUtf8 {
            line: at.line,
            column: at.column,
            valid_up_to: err.valid_up_to(),
        }
    }

    /// Position at which the error was detected.
    #[must_use]
    pub fn position(&self) -> Position {
        match *self {
            ScanError::Unmatched { line, column } | ScanError::InvalidUtf8 { line, column, .. } => {
                Position::new(line, column)
            }
        }
    }
}
