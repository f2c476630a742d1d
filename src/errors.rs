use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PathErrorType {
    LexerError,
    SyntaxError,
}

/// An error raised while scanning or parsing a leafref path.
///
/// Paths can't contain line breaks, so `line` is always 1. `column` is
/// 1-based and points at the first character that could not be scanned, or
/// at the start of the token that could not be parsed.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PathError {
    pub kind: PathErrorType,
    pub msg: String,
    pub line: usize,
    pub column: usize,
}

impl PathError {
    pub fn new(kind: PathErrorType, msg: String, line: usize, column: usize) -> Self {
        Self {
            kind,
            msg,
            line,
            column,
        }
    }

    pub fn lexer(msg: String, line: usize, column: usize) -> Self {
        Self {
            kind: PathErrorType::LexerError,
            msg,
            line,
            column,
        }
    }

    pub fn syntax(msg: String, line: usize, column: usize) -> Self {
        Self {
            kind: PathErrorType::SyntaxError,
            msg,
            line,
            column,
        }
    }
}

impl fmt::Display for PathErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathErrorType::LexerError => f.write_str("lexer error:"),
            PathErrorType::SyntaxError => f.write_str("syntax error:"),
        }
    }
}

impl std::error::Error for PathError {}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [L{}:C{}]",
            self.kind, self.msg, self.line, self.column
        )
    }
}
