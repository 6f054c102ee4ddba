use std::iter::Peekable;
use std::vec::IntoIter; // To iterate over Vec<Token>

use thiserror::Error;

use crate::Span;
use crate::lexer::{Token, TokenKind, tokenize};
use crate::types::{Atom, Node, Sexpr};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A read was attempted on an empty token stream: either the program
    /// was empty, or a `(` was never closed before the tokens ran out.
    #[error("unexpected end of input, expected {0}")]
    UnexpectedEof(String),
    /// A `)` turned up where an expression was expected to begin.
    #[error("unmatched `)` at {0}")]
    UnmatchedClose(Span),
}

// Result type alias for convenience
type ParseResult<T> = Result<T, ParseError>;

pub struct Parser {
    // We iterate over owned Tokens, consuming them.
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens: tokens.into_iter().peekable(),
        }
    }

    // Consumes the next token if available.
    fn next_token(&mut self) -> Option<Token> {
        self.tokens.next()
    }

    // Peeks at the next token without consuming.
    fn peek_token(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    /// Reads a single S-expression from the token stream, consuming exactly
    /// the tokens that expression required and leaving the rest for any
    /// enclosing call.
    pub fn parse_expr(&mut self) -> ParseResult<Node> {
        let token = self
            .next_token()
            .ok_or_else(|| ParseError::UnexpectedEof("an expression".to_string()))?;
        match token.kind {
            TokenKind::LParen => self.parse_list(token.span),
            TokenKind::RParen => Err(ParseError::UnmatchedClose(token.span)),
            TokenKind::Atom(text) => {
                Ok(Node::new(Sexpr::Atom(Atom::from_token(&text)), token.span))
            }
        }
    }

    /// Collects list elements after an opening `(`. The closing `)` is
    /// detected by lookahead, so it is removed in exactly one place and the
    /// returned tree is balanced by construction.
    fn parse_list(&mut self, open: Span) -> ParseResult<Node> {
        let mut items = Vec::new();
        loop {
            match self.peek_token() {
                None => return Err(ParseError::UnexpectedEof("`)`".to_string())),
                Some(token) if token.kind == TokenKind::RParen => {
                    let span = open.merge(token.span);
                    self.next_token(); // consume the `)`
                    return Ok(Node::new(Sexpr::List(items), span));
                }
                Some(_) => items.push(self.parse_expr()?),
            }
        }
    }

    /// Reads exactly one top-level expression and discards whatever tokens
    /// follow it. Use [`Parser::parse_all`] to read every top-level form.
    pub fn parse(mut self) -> ParseResult<Node> {
        self.parse_expr()
    }

    /// Reads every top-level form until the tokens run out. An empty stream
    /// yields an empty vector; a malformed form fails the whole call.
    pub fn parse_all(mut self) -> ParseResult<Vec<Node>> {
        let mut forms = Vec::new();
        while self.peek_token().is_some() {
            forms.push(self.parse_expr()?);
        }
        Ok(forms)
    }
}

// Helper functions to lex and parse a string directly (useful for tests and
// downstream callers)
pub fn parse_str(input: &str) -> ParseResult<Node> {
    Parser::new(tokenize(input)).parse()
}

pub fn parse_program_str(input: &str) -> ParseResult<Vec<Node>> {
    Parser::new(tokenize(input)).parse_all()
}
