use std::collections::VecDeque;

use crate::{
    env::Env,
    errors::PathError,
    lexer::Lexer,
    path::{NodeIdentifier, PathArgument, PathSegment, Predicate},
    token::{Token, TokenType},
};

use TokenType::*;

/// Tokens pulled from a lexer on demand, with a small lookahead buffer.
struct Tokens<'q> {
    lexer: Lexer<'q>,
    buffer: VecDeque<Token>,
}

impl<'q> Tokens<'q> {
    fn new(query: &'q str) -> Self {
        Self {
            lexer: Lexer::new(query),
            buffer: VecDeque::new(),
        }
    }

    fn fill(&mut self, n: usize) -> Result<(), PathError> {
        while self.buffer.len() < n {
            match self.lexer.next() {
                Some(token) => self.buffer.push_back(token?),
                None => break,
            }
        }
        Ok(())
    }

    fn peek_kind_nth(&mut self, n: usize) -> Result<Option<TokenType>, PathError> {
        self.fill(n + 1)?;
        Ok(self.buffer.get(n).map(|t| t.kind))
    }

    fn peek_kind(&mut self) -> Result<Option<TokenType>, PathError> {
        self.peek_kind_nth(0)
    }

    fn next(&mut self) -> Result<Option<Token>, PathError> {
        self.fill(1)?;
        Ok(self.buffer.pop_front())
    }

    fn end_of_expression(&self) -> PathError {
        let (line, column) = self.lexer.position();
        PathError::syntax(String::from("unexpected end of expression"), line, column)
    }
}

/// A leafref path parser.
///
/// A `Parser` holds no per-parse state, so a single instance can be shared
/// between threads. Every call to [`Parser::parse`] scans its input afresh.
///
/// The grammar is the RFC 7950 `path-arg` rule, plus an optional leading
/// `deref(relative-path)/` when [`Env::allow_deref`] is set:
///
/// ```text
/// path-arg        = deref-expr / path-str
/// deref-expr      = "deref" "(" relative-path ")" "/" relative-path
/// path-str        = absolute-path / relative-path
/// absolute-path   = 1*("/" node-identifier *path-predicate)
/// relative-path   = *("../") descendant-path
/// descendant-path = node-identifier [*path-predicate absolute-path]
/// path-predicate  = "[" node-identifier "=" path-key-expr "]"
/// path-key-expr   = "current()" "/" *("../") *(node-identifier "/") node-identifier
/// node-identifier = [prefix ":"] identifier
/// ```
pub struct Parser {
    env: Env,
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new(Env::standard())
    }
}

impl Parser {
    pub fn new(env: Env) -> Self {
        Parser { env }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn parse(&self, expr: &str) -> Result<PathArgument, PathError> {
        log::trace!("parsing leafref path {:?}", expr);

        let mut it = Tokens::new(expr);
        let path = self.parse_path_arg(&mut it)?;

        // parse_path_arg should have consumed all tokens
        match it.next()? {
            None => {
                log::trace!("parsed leafref path {:?} to {:?}", expr, path);
                Ok(path)
            }
            Some(token) => Err(unexpected(&token, "end of expression")),
        }
    }

    fn parse_path_arg(&self, it: &mut Tokens) -> Result<PathArgument, PathError> {
        match it.peek_kind()? {
            Some(Deref) if self.is_invocation(it)? => {
                if !self.env.allow_deref {
                    let token = self.expect(it, Deref)?;
                    return Err(PathError::syntax(
                        String::from("deref() is not permitted"),
                        token.line,
                        token.column,
                    ));
                }

                let (deref_up, deref_down) = self.parse_deref_invocation(it)?;
                self.eat_separator(it)?;
                let (up, down) = self.parse_relative_path(it)?;

                Ok(PathArgument {
                    up: up as isize,
                    down,
                    deref_up,
                    deref_down: Some(deref_down),
                })
            }
            Some(Slash) => Ok(PathArgument {
                up: -1,
                down: self.parse_absolute_path(it)?,
                deref_up: 0,
                deref_down: None,
            }),
            _ => {
                let (up, down) = self.parse_relative_path(it)?;
                Ok(PathArgument {
                    up: up as isize,
                    down,
                    deref_up: 0,
                    deref_down: None,
                })
            }
        }
    }

    /// Is the keyword at the front of the stream followed by an opening paren?
    /// If not, it's a plain identifier.
    fn is_invocation(&self, it: &mut Tokens) -> Result<bool, PathError> {
        Ok(match it.peek_kind_nth(1)? {
            Some(LParen) => true,
            Some(Whitespace) => it.peek_kind_nth(2)? == Some(LParen),
            _ => false,
        })
    }

    fn parse_deref_invocation(
        &self,
        it: &mut Tokens,
    ) -> Result<(usize, Vec<PathSegment>), PathError> {
        self.expect(it, Deref)?;
        self.skip_whitespace(it)?;
        self.expect(it, LParen)?;
        self.skip_whitespace(it)?;
        let rv = self.parse_relative_path(it)?;
        self.skip_whitespace(it)?;
        self.expect(it, RParen)?;
        Ok(rv)
    }

    fn parse_current_invocation(&self, it: &mut Tokens) -> Result<(), PathError> {
        self.expect(it, Current)?;
        self.skip_whitespace(it)?;
        self.expect(it, LParen)?;
        self.skip_whitespace(it)?;
        self.expect(it, RParen)?;
        Ok(())
    }

    fn parse_relative_path(
        &self,
        it: &mut Tokens,
    ) -> Result<(usize, Vec<PathSegment>), PathError> {
        let up = self.parse_dots(it)?;
        let mut down = vec![PathSegment::Node(self.parse_node_identifier(it)?)];

        match it.peek_kind()? {
            Some(LBracket) => {
                // predicates on the first node must be followed by an absolute path
                down.extend(self.parse_predicates(it)?);
                down.extend(self.parse_absolute_path(it)?);
            }
            _ => {
                if self.peek_separator(it)? {
                    down.extend(self.parse_absolute_path(it)?);
                }
            }
        }

        Ok((up, down))
    }

    fn parse_absolute_path(&self, it: &mut Tokens) -> Result<Vec<PathSegment>, PathError> {
        let mut segments: Vec<PathSegment> = Vec::new();
        loop {
            self.eat_separator(it)?;
            segments.push(PathSegment::Node(self.parse_node_identifier(it)?));
            segments.extend(self.parse_predicates(it)?);

            if !self.peek_separator(it)? {
                break;
            }
        }

        Ok(segments)
    }

    fn parse_predicates(&self, it: &mut Tokens) -> Result<Vec<PathSegment>, PathError> {
        let mut predicates: Vec<PathSegment> = Vec::new();
        while it.peek_kind()? == Some(LBracket) {
            predicates.push(PathSegment::Predicate(self.parse_predicate(it)?));
        }
        Ok(predicates)
    }

    fn parse_predicate(&self, it: &mut Tokens) -> Result<Predicate, PathError> {
        self.expect(it, LBracket)?;
        self.skip_whitespace(it)?;
        let node_id = self.parse_node_identifier(it)?;
        self.skip_whitespace(it)?;
        self.expect(it, Eq)?;
        self.skip_whitespace(it)?;

        self.parse_current_invocation(it)?;
        self.eat_separator(it)?;

        let up = self.parse_dots(it)?;
        let mut down = vec![self.parse_node_identifier(it)?];
        while self.peek_separator(it)? {
            self.eat_separator(it)?;
            down.push(self.parse_node_identifier(it)?);
        }

        self.skip_whitespace(it)?;
        self.expect(it, RBracket)?;
        Ok(Predicate::new(node_id, up, down))
    }

    /// Count leading `../` steps.
    fn parse_dots(&self, it: &mut Tokens) -> Result<usize, PathError> {
        let mut up: usize = 0;
        while it.peek_kind()? == Some(Dots) {
            it.next()?;
            self.eat_separator(it)?;
            up += 1;
        }
        Ok(up)
    }

    fn parse_node_identifier(&self, it: &mut Tokens) -> Result<NodeIdentifier, PathError> {
        let token = self.expect_identifier(it)?;

        if it.peek_kind()? == Some(Colon) {
            it.next()?;
            let name = self.expect_identifier(it)?;
            Ok(NodeIdentifier::Prefixed {
                prefix: token.value.into_string(),
                name: name.value.into_string(),
            })
        } else {
            Ok(NodeIdentifier::Name(token.value.into_string()))
        }
    }

    fn expect_identifier(&self, it: &mut Tokens) -> Result<Token, PathError> {
        match it.next()? {
            Some(token) if token.kind.is_identifier() => Ok(token),
            Some(token) => Err(unexpected(&token, "a node identifier")),
            None => Err(it.end_of_expression()),
        }
    }

    fn expect(&self, it: &mut Tokens, kind: TokenType) -> Result<Token, PathError> {
        match it.next()? {
            Some(token) if token.kind == kind => Ok(token),
            Some(token) => Err(unexpected(&token, &kind.to_string())),
            None => Err(it.end_of_expression()),
        }
    }

    fn skip_whitespace(&self, it: &mut Tokens) -> Result<(), PathError> {
        if it.peek_kind()? == Some(Whitespace) {
            it.next()?;
        }
        Ok(())
    }

    /// Is a `/`, possibly preceded by whitespace, next in the stream?
    fn peek_separator(&self, it: &mut Tokens) -> Result<bool, PathError> {
        Ok(match it.peek_kind()? {
            Some(Slash) => true,
            Some(Whitespace) => it.peek_kind_nth(1)? == Some(Slash),
            _ => false,
        })
    }

    /// A `/` with optional whitespace either side.
    fn eat_separator(&self, it: &mut Tokens) -> Result<(), PathError> {
        self.skip_whitespace(it)?;
        self.expect(it, Slash)?;
        self.skip_whitespace(it)?;
        Ok(())
    }
}

fn unexpected(token: &Token, expected: &str) -> PathError {
    PathError::syntax(
        format!("expected {}, found '{}'", expected, token.value),
        token.line,
        token.column,
    )
}
