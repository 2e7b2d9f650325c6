use core::fmt;

use tracing::trace;

use crate::{Pattern, ScanError, Scanner};

/// The result of a match operation.
///
/// A `Chain` is created by [`Scanner::match_one`],
/// [`Scanner::match_sequence`] or [`Scanner::match_pattern`] after the first
/// attempt has already run. It holds the scanner mutably, so the result must
/// be resolved (read, repeated or dropped) before the next match can start.
///
/// The count is read with [`count`](Self::count), by comparing against a
/// `usize`, or by converting into one:
///
/// ```rust
/// # use lexscan::Scanner;
/// let mut s = Scanner::from_text("aaab");
/// let run: usize = s.match_one(b'a').many().into();
/// assert_eq!(run, 3);
/// assert!(s.match_one(b'a') == 0);
/// ```
#[must_use = "a Chain holds the match count; read it, repeat it, or drop it"]
pub struct Chain<'s, P: Pattern> {
    scanner: &'s mut Scanner,
    pattern: P,
    count: usize,
}

impl<'s, P: Pattern> Chain<'s, P> {
    pub(crate) fn start(scanner: &'s mut Scanner, pattern: P) -> Self {
        let count = pattern.attempt(scanner);
        Self {
            scanner,
            pattern,
            count,
        }
    }

    /// Number of code units matched so far.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if anything was matched.
    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.count != 0
    }

    /// Repeats the attempt until it matches nothing.
    ///
    /// The count keeps the initial attempt, so `match_one(x).many()` reports
    /// the full run of `x`.
    pub fn many(mut self) -> Self {
        loop {
            let n = self.pattern.attempt(self.scanner);
            if n == 0 {
                break;
            }
            self.count += n;
        }
        self
    }

    /// Removes the matched code units from the end of the lexeme and returns
    /// the match count.
    ///
    /// The cursor and position are not affected: the input stays consumed.
    /// Removal stops once the lexeme is empty, so a pattern that shortened
    /// the lexeme itself can leave fewer units to remove than the count.
    #[allow(clippy::should_implement_trait)]
    pub fn drop(self) -> usize {
        let lexeme = self.scanner.lexeme();
        let keep = lexeme.len().saturating_sub(self.count);
        lexeme.truncate(keep);
        trace!(count = self.count, "drop");
        self.count
    }

    /// Converts a failed match into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Unmatched`] at the scanner's position when the
    /// count is zero.
    pub fn require(self) -> Result<usize, ScanError> {
        if self.count == 0 {
            return Err(ScanError::unmatched(self.scanner.position()));
        }
        Ok(self.count)
    }
}

impl<P: Pattern> From<Chain<'_, P>> for usize {
    fn from(chain: Chain<'_, P>) -> Self {
        chain.count
    }
}

impl<P: Pattern> PartialEq<usize> for Chain<'_, P> {
    fn eq(&self, other: &usize) -> bool {
        self.count == *other
    }
}

impl<P: Pattern> fmt::Debug for Chain<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("count", &self.count)
            .field("position", &self.scanner.position())
            .finish_non_exhaustive()
    }
}
