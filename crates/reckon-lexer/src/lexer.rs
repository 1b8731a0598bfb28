//! Core reckon lexer — converts expression text to a token stream.
//!
//! The lexer is fail-fast: the first character it cannot tokenize aborts
//! the scan with a classified error. By the time it runs, the evaluation
//! pipeline has already whitelisted the input, so a lexer-level character
//! failure only happens when the lexer is driven directly.

use reckon_types::{CalcError, Result, Span};

use crate::token::{Token, TokenKind};

/// The expression lexer.
///
/// Converts an expression string into a vector of [`Token`]s ending with
/// [`TokenKind::Eof`].
pub struct Lexer<'src> {
    /// The full expression as bytes.
    source: &'src [u8],
    /// The expression as text, for decoding non-ASCII characters in errors.
    text: &'src str,
    /// Current byte offset into `source`.
    pos: usize,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given expression.
    pub fn new(text: &'src str) -> Self {
        Self {
            source: text.as_bytes(),
            text,
            pos: 0,
        }
    }

    /// Lex the entire expression into a token stream.
    pub fn lex(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<u8> {
        let ch = self.source.get(self.pos).copied()?;
        self.pos += 1;
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Decode the full (possibly multi-byte) character at the cursor.
    fn current_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Skip whitespace, including non-ASCII whitespace such as NBSP —
    /// the character whitelist admits all of Unicode whitespace.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    /// Scan one token.
    fn scan_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        if self.at_end() {
            return Ok(Token::new(TokenKind::Eof, Span::point(self.pos)));
        }

        let start = self.pos;
        // skip_whitespace leaves the cursor on a character boundary
        let ch = self.peek().unwrap_or(0);

        match ch {
            b'0'..=b'9' => self.scan_number(start),

            // A leading dot starts a literal only when a digit follows
            // (".5" is legal input; a bare "." is not).
            b'.' => {
                if matches!(self.peek_at(1), Some(b'0'..=b'9')) {
                    self.scan_number(start)
                } else {
                    self.advance();
                    Err(CalcError::evaluation(
                        "unexpected '.'",
                        Span::new(start, self.pos),
                    ))
                }
            }

            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'%' => self.single(TokenKind::Percent),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),

            _ => {
                let ch = self.current_char().unwrap_or(ch as char);
                Err(CalcError::InvalidCharacters { ch, at: start })
            }
        }
    }

    /// Consume one byte and wrap it in a token.
    fn single(&mut self, kind: TokenKind) -> Result<Token> {
        let start = self.pos;
        self.advance();
        Ok(Token::new(kind, Span::new(start, self.pos)))
    }

    /// Scan a numeric literal: `\d+(\.\d*)?` or `\.\d+`.
    ///
    /// A trailing dot (`2.`) is accepted, matching what hand-typed
    /// calculator input produces mid-entry.
    fn scan_number(&mut self, start: usize) -> Result<Token> {
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }
        if self.peek() == Some(b'.') {
            self.advance();
            while let Some(b'0'..=b'9') = self.peek() {
                self.advance();
            }
        }

        let span = Span::new(start, self.pos);
        let text = &self.text[start..self.pos];
        let value: f64 = text
            .parse()
            .map_err(|_| CalcError::evaluation(format!("malformed number '{text}'"), span))?;

        Ok(Token::new(TokenKind::Number(value), span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .lex()
            .expect("lex should succeed")
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| *k != TokenKind::Eof)
            .collect()
    }

    #[test]
    fn test_simple_expression() {
        assert_eq!(
            kinds("2+2"),
            vec![
                TokenKind::Number(2.0),
                TokenKind::Plus,
                TokenKind::Number(2.0),
            ]
        );
    }

    #[test]
    fn test_number_spans() {
        let tokens = Lexer::new("10 + 2").lex().unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[1].span, Span::new(3, 4));
        assert_eq!(tokens[2].span, Span::new(5, 6));
    }

    #[test]
    fn test_leading_and_trailing_dot_literals() {
        assert_eq!(kinds(".5"), vec![TokenKind::Number(0.5)]);
        assert_eq!(kinds("2."), vec![TokenKind::Number(2.0)]);
    }

    #[test]
    fn test_bare_dot_is_an_error() {
        let err = Lexer::new("1+.").lex().unwrap_err();
        assert!(err.is_evaluation(), "got {err:?}");
    }

    #[test]
    fn test_unknown_character() {
        let err = Lexer::new("2+a").lex().unwrap_err();
        assert_eq!(err, CalcError::InvalidCharacters { ch: 'a', at: 2 });
    }

    #[test]
    fn test_non_ascii_whitespace_is_skipped() {
        // NBSP between the digits
        assert_eq!(
            kinds("1\u{a0}+\u{a0}2"),
            vec![
                TokenKind::Number(1.0),
                TokenKind::Plus,
                TokenKind::Number(2.0),
            ]
        );
    }
}
