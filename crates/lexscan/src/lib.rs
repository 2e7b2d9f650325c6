//! A character-level scanning primitive for hand-written lexers.
//!
//! A [`Scanner`] consumes an in-memory buffer one code unit at a time. It
//! tracks the line and column of the code unit most recently consumed,
//! accumulates consumed code units into a *lexeme*, and supports a single
//! level of undo via [`Scanner::backup`].
//!
//! Every match operation returns a [`Chain`], which reports how many code
//! units were matched and can repeat the attempt ([`Chain::many`]) or discard
//! the matched code units from the lexeme ([`Chain::drop`]).
//!
//! ```rust
//! use lexscan::{Position, Scanner};
//!
//! let mut s = Scanner::from_text("let  x = 42;");
//! assert_eq!(s.match_sequence("let").count(), 3);
//! s.lexeme().clear();
//!
//! // Skip whitespace without recording it.
//! assert_eq!(s.match_one(b" \t").many().drop(), 2);
//!
//! assert!(s.match_one(|c: u8| c.is_ascii_alphabetic()).is_match());
//! assert_eq!(s.lexeme().as_slice(), b"x");
//! assert_eq!(s.position(), Position::new(1, 6));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chain;
mod error;
mod options;
mod pattern;
mod position;
mod scanner;

#[cfg(test)]
mod tests;

pub use chain::Chain;
pub use error::ScanError;
pub use options::ScannerOptions;
pub use pattern::{CodeUnitClass, One, Pattern, Sequence};
pub use position::Position;
pub use scanner::Scanner;
