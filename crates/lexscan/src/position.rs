use core::fmt;

/// Location of the code unit most recently consumed by a
/// [`Scanner`](crate::Scanner).
///
/// Lines and columns are 1-based once anything has been consumed. Before the
/// first consumption both fields are zero, meaning no character has been
/// examined yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// 1-based line number, or 0 before the first consumption.
    pub line: usize,
    /// 1-based column number, or 0 before the first consumption.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Reports whether the position refers to a consumed code unit.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
