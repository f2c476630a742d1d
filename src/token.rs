use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenType {
    Whitespace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Dots,
    Slash,
    Eq,
    Colon,
    Identifier,

    Current,
    Deref,
}

impl TokenType {
    /// True for tokens that can stand in for a node identifier or prefix.
    pub fn is_identifier(&self) -> bool {
        matches!(
            self,
            TokenType::Identifier | TokenType::Current | TokenType::Deref
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Whitespace => f.write_str("whitespace"),
            TokenType::LParen => f.write_str("'('"),
            TokenType::RParen => f.write_str("')'"),
            TokenType::LBracket => f.write_str("'['"),
            TokenType::RBracket => f.write_str("']'"),
            TokenType::Dots => f.write_str("'..'"),
            TokenType::Slash => f.write_str("'/'"),
            TokenType::Eq => f.write_str("'='"),
            TokenType::Colon => f.write_str("':'"),
            TokenType::Identifier => f.write_str("identifier"),
            TokenType::Current => f.write_str("'current'"),
            TokenType::Deref => f.write_str("'deref'"),
        }
    }
}

/// A leafref path token, as produced by the lexer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenType,
    pub value: Box<str>,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenType, value: &str, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.to_string().into_boxed_str(),
            line,
            column,
        }
    }
}
