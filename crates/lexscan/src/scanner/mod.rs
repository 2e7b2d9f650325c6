//! Scanner: cursor, lexeme and position bookkeeping over one input buffer.
//!
//! What it does
//! - Owns the input buffer for a scanning session and a cursor into it.
//!   `peek()`/`peek_nth()` look ahead without mutating; `advance()` is the only
//!   forward-moving primitive.
//! - Records every consumed code unit in the lexeme. Callers clear or take the
//!   lexeme between tokens; doing so never moves the cursor.
//! - Tracks the line and column of the most recently consumed code unit.
//!
//! Position tracking
//! - The line break is attributed to the code unit *after* a newline. The
//!   newline itself is the last column of its own line. This is driven by a
//!   `wrap` flag carried forward from the previous consumption, which is also
//!   set before anything has been consumed so the first code unit lands on
//!   line 1.
//!
//! Invariants
//! - `cursor` moves by exactly one per `advance()` and per successful
//!   `backup()`.
//! - `saved` holds the state from before the last consumption and is taken by
//!   `backup()`, so at most one level of undo exists at any time.

use alloc::{string::String, vec::Vec};
use core::fmt;

use bstr::BStr;
use tracing::trace;

use crate::{
    Chain, Position, ScanError, ScannerOptions,
    pattern::{CodeUnitClass, One, Pattern, Sequence},
};

/// Position plus the carried-forward line wrap flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    position: Position,
    /// The next consumed code unit starts a new line.
    wrap: bool,
}

impl State {
    const INITIAL: State = State {
        position: Position::new(0, 0),
        wrap: true,
    };
}

/// A character-level scanner over an in-memory buffer.
///
/// Typical loop:
/// ```rust
/// use lexscan::Scanner;
///
/// let mut s = Scanner::from_text("count = 358");
/// let mut words = Vec::new();
/// while !s.is_empty() {
///     if s.match_one(b" =").many().drop() > 0 {
///         continue;
///     }
///     if s.match_one(|c: u8| c.is_ascii_alphanumeric()).many().is_match() {
///         words.push(s.take_lexeme_string().unwrap());
///     } else {
///         break;
///     }
/// }
/// assert_eq!(words, ["count", "358"]);
/// ```
#[derive(Clone)]
pub struct Scanner {
    buffer: Vec<u8>,
    cursor: usize,
    lexeme: Vec<u8>,
    state: State,
    saved: Option<State>,
    options: ScannerOptions,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::with_options(ScannerOptions::default())
    }
}

impl Scanner {
    /// Creates an empty scanner with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scanner with the given options.
    #[must_use]
    pub fn with_options(options: ScannerOptions) -> Self {
        Self {
            buffer: Vec::new(),
            cursor: 0,
            lexeme: Vec::with_capacity(options.lexeme_capacity),
            state: State::INITIAL,
            saved: None,
            options,
        }
    }

    /// Creates a scanner with default options and assigns `text` to it.
    #[must_use]
    pub fn from_text(text: impl AsRef<[u8]>) -> Self {
        let mut s = Self::default();
        s.assign(text);
        s
    }

    /// Returns the options this scanner was created with.
    #[must_use]
    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    /// Replaces the input and resets all other state.
    ///
    /// The lexeme is cleared, the cursor returns to the start, the position
    /// returns to `0:0`, and any pending backup is discarded.
    pub fn assign(&mut self, text: impl AsRef<[u8]>) {
        let text = text.as_ref();
        self.buffer.clear();
        self.buffer.extend_from_slice(text);
        self.lexeme.clear();
        self.lexeme.reserve(self.options.lexeme_capacity);
        self.cursor = 0;
        self.state = State::INITIAL;
        self.saved = None;
        trace!(len = text.len(), "assign");
    }

    /// Returns the position of the most recently consumed code unit.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Position {
        self.state.position
    }

    /// Returns the index of the next unconsumed code unit.
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` once every code unit of the input has been consumed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.buffer.len()
    }

    /// Returns the unconsumed input.
    #[must_use]
    pub fn remaining(&self) -> &[u8] {
        self.buffer.get(self.cursor..).unwrap_or_default()
    }

    /// Returns the next code unit without consuming it, or `None` at end of
    /// input.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.peek_nth(0)
    }

    /// Returns the code unit `offset` places past the cursor without
    /// consuming anything, or `None` if that lies beyond the input.
    #[inline]
    #[must_use]
    pub fn peek_nth(&self, offset: usize) -> Option<u8> {
        let idx = self.cursor.checked_add(offset)?;
        self.buffer.get(idx).copied()
    }

    /// Consumes the next code unit, appends it to the lexeme and updates the
    /// position.
    ///
    /// Returns `None` without touching any state at end of input.
    pub fn advance(&mut self) -> Option<u8> {
        let unit = self.peek()?;

        self.lexeme.push(unit);
        self.cursor += 1;
        self.saved = Some(self.state);

        let pos = &mut self.state.position;
        if self.state.wrap {
            pos.line += 1;
            pos.column = 0;
        }
        pos.column += 1;
        self.state.wrap = unit == self.options.newline;

        trace!(
            cursor = self.cursor,
            unit = ?char::from(unit),
            line = pos.line,
            column = pos.column,
            "advance"
        );
        Some(unit)
    }

    /// Undoes the most recent [`advance`](Self::advance).
    ///
    /// Only one level of undo is kept: this succeeds once after each advance
    /// and then returns `false` until the next advance. It also returns
    /// `false` when the lexeme is empty, since there is no code unit left to
    /// take back. On failure nothing changes.
    pub fn backup(&mut self) -> bool {
        if self.lexeme.is_empty() {
            trace!(cursor = self.cursor, "backup refused: empty lexeme");
            return false;
        }
        let Some(saved) = self.saved.take() else {
            trace!(cursor = self.cursor, "backup refused: nothing saved");
            return false;
        };

        self.lexeme.pop();
        self.cursor -= 1;
        self.state = saved;
        trace!(
            cursor = self.cursor,
            line = saved.position.line,
            column = saved.position.column,
            "backup"
        );
        true
    }

    /// Mutable access to the lexeme.
    ///
    /// Clearing or taking the lexeme does not move the cursor or position.
    #[inline]
    pub fn lexeme(&mut self) -> &mut Vec<u8> {
        &mut self.lexeme
    }

    /// Moves the lexeme out, leaving an empty one behind.
    pub fn take_lexeme(&mut self) -> Vec<u8> {
        let cap = self.options.lexeme_capacity;
        core::mem::replace(&mut self.lexeme, Vec::with_capacity(cap))
    }

    /// Returns the lexeme as text.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidUtf8`] if the lexeme is not UTF-8, e.g.
    /// when a multi-byte character was only partly consumed.
    pub fn lexeme_str(&self) -> Result<&str, ScanError> {
        core::str::from_utf8(&self.lexeme).map_err(|e| ScanError::invalid_utf8(self.position(), e))
    }

    /// Moves the lexeme out as a `String`, leaving an empty one behind.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidUtf8`] if the lexeme is not UTF-8. The
    /// lexeme is left in place in that case.
    pub fn take_lexeme_string(&mut self) -> Result<String, ScanError> {
        self.lexeme_str()?;
        let bytes = self.take_lexeme();
        String::from_utf8(bytes).map_err(|e| ScanError::invalid_utf8(self.position(), e.utf8_error()))
    }

    /// Runs one attempt of `pattern` and returns its result.
    pub fn match_pattern<P: Pattern>(&mut self, pattern: P) -> Chain<'_, P> {
        Chain::start(self, pattern)
    }

    /// Matches one code unit belonging to `class`: a single `u8`, a set given
    /// as `&str`, byte slice or array, or a predicate `Fn(u8) -> bool`.
    ///
    /// ```rust
    /// # use lexscan::Scanner;
    /// let mut s = Scanner::from_text("a1 ");
    /// assert_eq!(s.match_one(b'a'), 1);
    /// assert_eq!(s.match_one(|c: u8| c.is_ascii_digit()), 1);
    /// assert_eq!(s.match_one(" \t"), 1);
    /// assert!(s.is_empty());
    /// ```
    pub fn match_one<C: CodeUnitClass>(&mut self, class: C) -> Chain<'_, One<C>> {
        self.match_pattern(One(class))
    }

    /// Matches `seq` in full or not at all.
    ///
    /// ```rust
    /// # use lexscan::Scanner;
    /// let mut s = Scanner::from_text("ggh");
    /// assert_eq!(s.match_sequence("ggH"), 0);
    /// assert_eq!(s.cursor(), 0);
    /// assert_eq!(s.match_sequence("ggh"), 3);
    /// ```
    pub fn match_sequence<'p, S>(&mut self, seq: &'p S) -> Chain<'_, Sequence<'p>>
    where
        S: AsRef<[u8]> + ?Sized,
    {
        self.match_pattern(Sequence(seq.as_ref()))
    }
}

impl fmt::Debug for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("position", &self.state.position)
            .field("cursor", &self.cursor)
            .field("lexeme", &BStr::new(&self.lexeme))
            .field("remaining", &BStr::new(self.remaining()))
            .finish_non_exhaustive()
    }
}
