//! Match patterns.
//!
//! A [`Pattern`] is one attempt at matching upcoming input. It either
//! consumes code units from the scanner and reports how many, or consumes
//! nothing and reports zero. [`Chain::many`](crate::Chain::many) relies on
//! this: a zero result must leave the scanner untouched.
//!
//! The built-in patterns are [`One`], which consumes a single code unit
//! belonging to a [`CodeUnitClass`], and [`Sequence`], which consumes a
//! literal run of code units all-or-nothing.

use bstr::ByteSlice;

use crate::Scanner;

/// A single match attempt against a [`Scanner`].
pub trait Pattern {
    /// Attempts one match, returning the number of code units consumed.
    ///
    /// Implementations must not mutate the scanner when they return zero.
    fn attempt(&self, scanner: &mut Scanner) -> usize;
}

/// A set of code units tested for membership one at a time.
///
/// Implemented for a single `u8`, for byte slices, arrays and `&str` (treated
/// as unordered sets), and for predicates `Fn(u8) -> bool`.
///
/// Classes are never asked about end of input.
pub trait CodeUnitClass {
    /// Reports whether `unit` belongs to the class.
    fn contains(&self, unit: u8) -> bool;
}

impl CodeUnitClass for u8 {
    #[inline]
    fn contains(&self, unit: u8) -> bool {
        *self == unit
    }
}

impl CodeUnitClass for &[u8] {
    #[inline]
    fn contains(&self, unit: u8) -> bool {
        self.find_byte(unit).is_some()
    }
}

impl<const N: usize> CodeUnitClass for [u8; N] {
    #[inline]
    fn contains(&self, unit: u8) -> bool {
        self.as_slice().contains(&unit)
    }
}

impl<const N: usize> CodeUnitClass for &[u8; N] {
    #[inline]
    fn contains(&self, unit: u8) -> bool {
        self.as_slice().contains(&unit)
    }
}

impl CodeUnitClass for &str {
    #[inline]
    fn contains(&self, unit: u8) -> bool {
        self.as_bytes().find_byte(unit).is_some()
    }
}

impl<F> CodeUnitClass for F
where
    F: Fn(u8) -> bool,
{
    #[inline]
    fn contains(&self, unit: u8) -> bool {
        self(unit)
    }
}

/// Matches exactly one code unit that belongs to the class `C`.
#[derive(Debug, Clone, Copy)]
pub struct One<C>(pub C);

impl<C: CodeUnitClass> Pattern for One<C> {
    #[inline]
    fn attempt(&self, scanner: &mut Scanner) -> usize {
        match scanner.peek() {
            Some(unit) if self.0.contains(unit) => {
                scanner.advance();
                1
            }
            _ => 0,
        }
    }
}

/// Matches a literal run of code units, all or nothing.
///
/// The whole run is checked by lookahead before anything is consumed, so a
/// mismatch at any offset leaves the scanner exactly as it was. An empty
/// sequence never matches.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<'a>(pub &'a [u8]);

impl Pattern for Sequence<'_> {
    fn attempt(&self, scanner: &mut Scanner) -> usize {
        let seq = self.0;
        let matched = seq
            .iter()
            .enumerate()
            .all(|(off, &unit)| scanner.peek_nth(off) == Some(unit));
        if !matched {
            return 0;
        }
        for _ in seq {
            scanner.advance();
        }
        seq.len()
    }
}
