//! AST node types for arithmetic expressions.
//!
//! Every node carries a [`Span`] for error reporting. The recursive
//! positions are boxed to keep the enum size down. The AST is an internal
//! representation — consumers of the engine only ever see strings in and
//! numbers (or classified errors) out.

use crate::Span;

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Every expression form the calculator grammar produces.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Numeric literal: `42`, `3.14`, `.5`
    Number(f64),
    /// Unary sign: `-x`, `+x`
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Binary arithmetic: `a + b`, `a * b`, ...
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    /// Parenthesized sub-expression: `(a + b)`
    Paren(Box<Expr>),
}

/// Binary arithmetic operators, standard precedence (`* /` bind tighter
/// than `+ -`, equal precedence associates left-to-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => f.write_str("+"),
            Self::Sub => f.write_str("-"),
            Self::Mul => f.write_str("*"),
            Self::Div => f.write_str("/"),
        }
    }
}

/// Unary sign operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `+x` — a no-op, accepted because hand-typed input like `+2` is legal
    /// calculator input.
    Plus,
}
