mod arbitrary;


use alloc::vec::Vec;

use crate::{Position, Scanner};

/// Everything a caller can observe about a scanner between operations.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Observed {
    cursor: usize,
    position: Position,
    lexeme: Vec<u8>,
}

fn observe(s: &mut Scanner) -> Observed {
    Observed {
        cursor: s.cursor(),
        position: s.position(),
        lexeme: s.lexeme().clone(),
    }
}

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
