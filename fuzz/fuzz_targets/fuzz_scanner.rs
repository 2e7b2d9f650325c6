#![no_main]
use arbitrary::Arbitrary;
use lexscan::{Position, Scanner};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Advance,
    Backup,
    ClearLexeme,
    MatchUnit(u8),
    MatchSet(Vec<u8>),
    MatchSequence(Vec<u8>),
    Many(Vec<u8>),
    Drop(Vec<u8>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    ops: Vec<Op>,
}

/// Position of the code unit at `cursor - 1`, recomputed from the buffer.
fn expected_position(text: &[u8], cursor: usize) -> Position {
    if cursor == 0 {
        return Position::new(0, 0);
    }
    let last = cursor - 1;
    let before = &text[..last];
    let line = 1 + before.iter().filter(|&&c| c == b'\n').count();
    let start = before.iter().rposition(|&c| c == b'\n').map_or(0, |i| i + 1);
    Position::new(line, last - start + 1)
}

fuzz_target!(|input: Input| {
    let text = &input.text;
    let mut s = Scanner::from_text(text);
    // Mirror of the lexeme that only follows consumption, clears and drops.
    let mut lexeme: Vec<u8> = Vec::new();

    for op in &input.ops {
        let cursor = s.cursor();
        let position = s.position();
        match op {
            Op::Advance => {
                if let Some(c) = s.advance() {
                    lexeme.push(c);
                }
            }
            Op::Backup => {
                let had = !s.lexeme().is_empty();
                if s.backup() {
                    assert!(had);
                    lexeme.pop();
                    assert_eq!(s.cursor(), cursor - 1);
                    assert!(!s.backup(), "second backup must fail");
                } else {
                    assert_eq!(s.cursor(), cursor);
                    assert_eq!(s.position(), position);
                }
            }
            Op::ClearLexeme => {
                s.lexeme().clear();
                lexeme.clear();
            }
            Op::MatchUnit(c) => {
                let n = s.match_one(*c).count();
                lexeme.extend(&text[cursor..cursor + n]);
            }
            Op::MatchSet(set) => {
                let n = s.match_one(set.as_slice()).count();
                lexeme.extend(&text[cursor..cursor + n]);
            }
            Op::MatchSequence(seq) => {
                let n = s.match_sequence(seq).count();
                if n == 0 {
                    assert_eq!(s.cursor(), cursor);
                    assert_eq!(s.position(), position);
                } else {
                    assert_eq!(&text[cursor..cursor + n], seq.as_slice());
                }
                lexeme.extend(&text[cursor..cursor + n]);
            }
            Op::Many(set) => {
                let n = s.match_one(set.as_slice()).many().count();
                lexeme.extend(&text[cursor..cursor + n]);
            }
            Op::Drop(set) => {
                let n = s.match_one(set.as_slice()).many().drop();
                assert_eq!(s.cursor(), cursor + n);
            }
        }

        assert_eq!(s.lexeme().as_slice(), lexeme.as_slice());
        assert_eq!(s.position(), expected_position(text, s.cursor()));
        assert_eq!(s.is_empty(), s.cursor() >= text.len());
    }
});
