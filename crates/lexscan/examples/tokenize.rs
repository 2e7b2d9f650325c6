//! Tokenizes a small `key = value` configuration text with a hand-written
//! lexer built on [`lexscan::Scanner`], printing each token with the position
//! of its last character.
//!
//! Run with
//!
//! ```bash
//! cargo run -p lexscan --example tokenize
//! ```

use core::{fmt, num::ParseIntError};

use lexscan::{ScanError, Scanner};

#[derive(Debug, thiserror::Error)]
enum LexError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("number ending at {at} does not fit in u64: {source}")]
    Number { at: String, source: ParseIntError },
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Key(String),
    Equals,
    Number(u64),
    Text(String),
    Comment,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Key(key) => write!(f, "key {key}"),
            Token::Equals => f.write_str("="),
            Token::Number(n) => write!(f, "number {n}"),
            Token::Text(text) => write!(f, "text {text:?}"),
            Token::Comment => f.write_str("comment"),
        }
    }
}

fn next_token(s: &mut Scanner) -> Result<Option<Token>, LexError> {
    // Blank space never reaches the lexeme.
    let _ = s.match_one(b" \t\n").many().drop();
    if s.is_empty() {
        return Ok(None);
    }

    if s.match_one(b'#').is_match() {
        let _ = s.match_one(|c: u8| c != b'\n').many();
        s.lexeme().clear();
        return Ok(Some(Token::Comment));
    }
    if s.match_one(b'=').is_match() {
        s.lexeme().clear();
        return Ok(Some(Token::Equals));
    }
    if s.match_one(|c: u8| c.is_ascii_digit()).many().is_match() {
        let digits = s.take_lexeme_string()?;
        let n = digits.parse().map_err(|source| LexError::Number {
            at: s.position().to_string(),
            source,
        })?;
        return Ok(Some(Token::Number(n)));
    }
    if s.match_one(b'"').is_match() {
        s.lexeme().clear();
        let _ = s.match_one(|c: u8| c != b'"' && c != b'\n').many();
        let text = s.take_lexeme_string()?;
        s.match_one(b'"').require()?;
        s.lexeme().clear();
        return Ok(Some(Token::Text(text)));
    }
    s.match_one(|c: u8| c.is_ascii_alphanumeric() || c == b'_')
        .many()
        .require()?;
    Ok(Some(Token::Key(s.take_lexeme_string()?)))
}

fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut s = Scanner::from_text(source);
    let mut tokens = Vec::new();
    while let Some(token) = next_token(&mut s)? {
        println!("{:>5}  {token}", s.position().to_string());
        tokens.push(token);
    }
    Ok(tokens)
}

fn main() -> Result<(), LexError> {
    tokenize("# server settings\nhost = \"example.org\"\nport = 8080\n")?;
    Ok(())
}
