/// Configuration options for a [`Scanner`](crate::Scanner).
///
/// # Examples
///
/// ```rust
/// use lexscan::{Scanner, ScannerOptions};
///
/// // Classic Mac line endings.
/// let mut s = Scanner::with_options(ScannerOptions {
///     newline: b'\r',
///     ..Default::default()
/// });
/// s.assign("a\rb");
/// s.advance();
/// s.advance();
/// s.advance();
/// assert_eq!((s.position().line, s.position().column), (2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerOptions {
    /// The code unit that terminates a line.
    ///
    /// The terminator itself is reported as the last column of its line; the
    /// code unit after it starts the next line at column 1.
    ///
    /// # Default
    ///
    /// `b'\n'`
    pub newline: u8,

    /// Number of code units reserved for the lexeme when a scanner is created
    /// and each time new input is assigned.
    ///
    /// Only an allocation hint; the lexeme grows as needed.
    ///
    /// # Default
    ///
    /// `0`
    pub lexeme_capacity: usize,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            newline: b'\n',
            lexeme_capacity: 0,
        }
    }
}
