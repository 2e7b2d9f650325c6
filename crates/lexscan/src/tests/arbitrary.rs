use alloc::{boxed::Box, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{Position, Scanner};

/// Code units the generators draw from. Kept small so that matches, newlines
/// and mismatches all show up often.
const ALPHABET: &[u8] = b"ab \t\n";

fn unit(g: &mut Gen) -> u8 {
    *g.choose(ALPHABET).unwrap()
}

fn units(g: &mut Gen, max: usize) -> Vec<u8> {
    let len = usize::arbitrary(g) % (max + 1);
    (0..len).map(|_| unit(g)).collect()
}

/// Input text over [`ALPHABET`].
#[derive(Debug, Clone)]
pub(crate) struct Text(pub Vec<u8>);

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(units(g, 24))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Text))
    }
}

/// One scanner operation.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    Advance,
    Backup,
    ClearLexeme,
    MatchUnit(u8),
    MatchSet(Vec<u8>),
    MatchSequence(Vec<u8>),
    ManyUnit(u8),
    DropSet(Vec<u8>),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match usize::arbitrary(g) % 8 {
            0 => Op::Advance,
            1 => Op::Backup,
            2 => Op::ClearLexeme,
            3 => Op::MatchUnit(unit(g)),
            4 => Op::MatchSet(units(g, 3)),
            5 => Op::MatchSequence(units(g, 4)),
            6 => Op::ManyUnit(unit(g)),
            _ => Op::DropSet(units(g, 3)),
        }
    }
}

impl Op {
    pub(crate) fn apply(&self, s: &mut Scanner) {
        match self {
            Op::Advance => {
                s.advance();
            }
            Op::Backup => {
                s.backup();
            }
            Op::ClearLexeme => s.lexeme().clear(),
            Op::MatchUnit(c) => {
                let _ = s.match_one(*c);
            }
            Op::MatchSet(set) => {
                let _ = s.match_one(set.as_slice());
            }
            Op::MatchSequence(seq) => {
                let _ = s.match_sequence(seq);
            }
            Op::ManyUnit(c) => {
                let _ = s.match_one(*c).many();
            }
            Op::DropSet(set) => {
                s.match_one(set.as_slice()).many().drop();
            }
        }
    }
}

/// Position of the code unit at `cursor - 1`, computed from scratch.
pub(crate) fn expected_position(buffer: &[u8], cursor: usize) -> Position {
    if cursor == 0 {
        return Position::new(0, 0);
    }
    let last = cursor - 1;
    let consumed_before = &buffer[..last];
    let line = 1 + consumed_before.iter().filter(|&&c| c == b'\n').count();
    let line_start = consumed_before
        .iter()
        .rposition(|&c| c == b'\n')
        .map_or(0, |i| i + 1);
    Position::new(line, last - line_start + 1)
}
