//! Core parser infrastructure: token cursor and error helpers.

use reckon_lexer::{Token, TokenKind};
use reckon_types::{CalcError, Result, Span};

/// Maximum expression nesting depth.
///
/// Bounds recursion in both the parser and the tree-walking evaluator, so
/// pathological input such as a long run of `(` fails cleanly instead of
/// overflowing the stack.
pub(crate) const MAX_EXPR_DEPTH: u32 = 64;

/// The expression parser.
///
/// Consumes a token stream produced by the lexer and builds an AST.
/// Fail-fast: the first malformed construct aborts the parse with a
/// classified [`CalcError::Evaluation`].
pub struct Parser {
    /// The token stream (always ends with Eof).
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    /// Current expression nesting depth.
    pub(crate) expr_depth: u32,
}

impl Parser {
    /// Create a new parser from a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            expr_depth: 0,
        }
    }

    /// Parse the whole token stream as a single expression.
    ///
    /// Trailing tokens after a complete expression are an error
    /// (`"2)"`, `"1 2"`).
    pub fn parse(mut self) -> Result<reckon_types::ast::Expr> {
        if self.at_end() {
            return Err(CalcError::evaluation("empty expression", self.current_span()));
        }
        let expr = self.parse_expression()?;
        if !self.at_end() {
            return Err(self.unexpected_token());
        }
        Ok(expr)
    }

    // ── Token cursor ──────────────────────────────────────────────────────

    /// Returns the current token without advancing.
    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or_else(|| {
            self.tokens
                .last()
                .expect("token stream should end with Eof")
        })
    }

    /// Returns the kind of the current token.
    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    /// Advance the cursor by one and return the consumed token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(crate) fn at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    /// Consume the expected token or fail.
    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Token> {
        if self.peek_kind() == kind {
            Ok(self.advance())
        } else {
            Err(CalcError::evaluation(
                format!("expected '{}', found '{}'", kind, self.peek_kind()),
                self.current_span(),
            ))
        }
    }

    // ── Errors ────────────────────────────────────────────────────────────

    /// Error for an out-of-place token at the cursor.
    pub(crate) fn unexpected_token(&self) -> CalcError {
        CalcError::evaluation(
            format!("unexpected token '{}'", self.peek_kind()),
            self.current_span(),
        )
    }
}
