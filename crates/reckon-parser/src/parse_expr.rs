//! Expression parsing with standard operator precedence.
//!
//! Precedence (lowest → highest):
//! 3. `+`, `-` (left-associative)
//! 2. `*`, `/` (left-associative)
//! 1. unary `-`, unary `+`
//! 0. literals, `( ... )`
//!
//! `%` never appears in well-formed input at this stage: the percent
//! transform has already rewritten every `<literal>%`, so a surviving `%`
//! token is rejected here as an unexpected token.

use reckon_lexer::TokenKind;
use reckon_types::ast::{BinOp, Expr, ExprKind, UnaryOp};
use reckon_types::{CalcError, Result};

use crate::parser::{Parser, MAX_EXPR_DEPTH};

impl Parser {
    /// Parse an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr> {
        self.expr_depth += 1;
        if self.expr_depth > MAX_EXPR_DEPTH {
            self.expr_depth -= 1;
            return Err(CalcError::evaluation(
                format!("maximum expression nesting depth is {MAX_EXPR_DEPTH}"),
                self.current_span(),
            ));
        }
        let result = self.parse_add();
        self.expr_depth -= 1;
        result
    }

    /// `AddExpr = MulExpr { ("+" | "-") MulExpr }`
    fn parse_add(&mut self) -> Result<Expr> {
        let mut left = self.parse_mul()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_mul()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `MulExpr = UnaryExpr { ("*" | "/") UnaryExpr }`
    fn parse_mul(&mut self) -> Result<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    /// `UnaryExpr = [ "-" | "+" ] UnaryExpr | PrimaryExpr`
    ///
    /// Signs nest (`--5` is 5) the way the original input language
    /// accepted them.
    fn parse_unary(&mut self) -> Result<Expr> {
        let start = self.current_span();
        let op = match self.peek_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Plus => Some(UnaryOp::Plus),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            self.expr_depth += 1;
            if self.expr_depth > MAX_EXPR_DEPTH {
                self.expr_depth -= 1;
                return Err(CalcError::evaluation(
                    format!("maximum expression nesting depth is {MAX_EXPR_DEPTH}"),
                    self.current_span(),
                ));
            }
            let operand = self.parse_unary();
            self.expr_depth -= 1;
            let operand = operand?;
            let span = start.merge(operand.span);
            Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ))
        } else {
            self.parse_primary()
        }
    }

    /// `PrimaryExpr = Number | "(" Expression ")"`
    fn parse_primary(&mut self) -> Result<Expr> {
        match self.peek_kind() {
            TokenKind::Number(value) => {
                let value = *value;
                let token = self.advance();
                Ok(Expr::new(ExprKind::Number(value), token.span))
            }
            TokenKind::LParen => {
                let open = self.advance();
                let inner = self.parse_expression()?;
                let close = self.expect(&TokenKind::RParen)?;
                let span = open.span.merge(close.span);
                Ok(Expr::new(ExprKind::Paren(Box::new(inner)), span))
            }
            _ => Err(self.unexpected_token()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reckon_lexer::Lexer;

    fn parse(source: &str) -> Result<Expr> {
        let tokens = Lexer::new(source).lex()?;
        Parser::new(tokens).parse()
    }

    #[test]
    fn test_precedence_shape() {
        // 1+2*3 must parse as 1+(2*3)
        let expr = parse("1+2*3").unwrap();
        let ExprKind::Binary { op, right, .. } = expr.kind else {
            panic!("expected binary root");
        };
        assert_eq!(op, BinOp::Add);
        assert!(matches!(
            right.kind,
            ExprKind::Binary { op: BinOp::Mul, .. }
        ));
    }

    #[test]
    fn test_left_associativity() {
        // 8-2-1 must parse as (8-2)-1
        let expr = parse("8-2-1").unwrap();
        let ExprKind::Binary { op, left, .. } = expr.kind else {
            panic!("expected binary root");
        };
        assert_eq!(op, BinOp::Sub);
        assert!(matches!(left.kind, ExprKind::Binary { op: BinOp::Sub, .. }));
    }

    #[test]
    fn test_nested_signs() {
        let expr = parse("--5").unwrap();
        assert!(matches!(
            expr.kind,
            ExprKind::Unary {
                op: UnaryOp::Neg,
                ..
            }
        ));
    }

    #[test]
    fn test_stray_percent_rejected() {
        let err = parse("(1+2)%").unwrap_err();
        assert!(err.is_evaluation(), "got {err:?}");
    }
}
