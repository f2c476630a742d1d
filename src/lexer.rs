//! A leafref path scanner.
//!
//! Tokens are produced on demand. At each position the lexer tries a fixed,
//! ordered list of patterns and commits to the first one that matches, so the
//! order of the pattern table is significant: `..` must be tried before
//! anything that could match a single dot.
use crate::{
    errors::PathError,
    token::{Token, TokenType},
};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PATTERNS: Vec<(TokenType, Regex)> = vec![
        // whitespace collapsed into one token
        (TokenType::Whitespace, pattern(r"[ \t]+")),
        (TokenType::LParen, pattern(r"\(")),
        (TokenType::RParen, pattern(r"\)")),
        (TokenType::LBracket, pattern(r"\[")),
        (TokenType::RBracket, pattern(r"\]")),
        (TokenType::Dots, pattern(r"\.\.")),
        (TokenType::Slash, pattern(r"/")),
        (TokenType::Eq, pattern(r"=")),
        (TokenType::Colon, pattern(r":")),
        (TokenType::Identifier, pattern(r"[a-zA-Z_][a-zA-Z0-9_\-.]*")),
    ];
}

fn pattern(re: &str) -> Regex {
    Regex::new(&format!("^(?:{})", re)).expect("invalid token pattern")
}

/// Only these two functions are available, and they get their own tokens.
fn keyword(value: &str) -> TokenType {
    match value {
        "current" => TokenType::Current,
        "deref" => TokenType::Deref,
        _ => TokenType::Identifier,
    }
}

/// A cursor over a leafref path, yielding one token at a time.
///
/// Paths can't contain line breaks, so the line number is always 1 and the
/// column simply advances by the length of each token. Once an error has been
/// yielded the lexer is exhausted.
pub struct Lexer<'q> {
    query: &'q str,
    pos: usize,
    line: usize,
    column: usize,
    done: bool,
}

impl<'q> Lexer<'q> {
    pub fn new(query: &'q str) -> Self {
        Self {
            query,
            pos: 0,
            line: 1,
            column: 1,
            done: false,
        }
    }

    /// Restart this lexer on new input, discarding any state from a previous scan.
    pub fn input(&mut self, query: &'q str) {
        *self = Lexer::new(query);
    }

    /// Line and column of the next character to be scanned.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn scan(&mut self) -> Result<Token, PathError> {
        let rest = &self.query[self.pos..];

        for (kind, re) in PATTERNS.iter() {
            if let Some(m) = re.find(rest) {
                let value = m.as_str();
                let kind = match kind {
                    TokenType::Identifier => keyword(value),
                    _ => *kind,
                };

                let token = Token::new(kind, value, self.line, self.column);
                self.pos += value.len();
                self.column += value.chars().count();
                return Ok(token);
            }
        }

        let ch = rest.chars().next().unwrap_or_default();
        Err(PathError::lexer(
            format!("unexpected character '{}'", ch),
            self.line,
            self.column,
        ))
    }
}

impl<'q> Iterator for Lexer<'q> {
    type Item = Result<Token, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.pos >= self.query.len() {
            self.done = true;
            return None;
        }

        let rv = self.scan();
        if rv.is_err() {
            self.done = true;
        }
        Some(rv)
    }
}

/// Scan the whole of `query`, stopping at the first lexer error.
pub fn tokenize(query: &str) -> Result<Vec<Token>, PathError> {
    Lexer::new(query).collect()
}
