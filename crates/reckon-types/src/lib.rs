//! Shared types for the reckon calculator engine.
//!
//! This crate defines the source spans, classified error types, and AST
//! nodes used across the lexer, parser, evaluator, and session crates.

mod error;
mod span;
pub mod ast;

pub use error::{CalcError, MathErrorKind};
pub use span::Span;

/// Result type used throughout the reckon engine.
pub type Result<T> = std::result::Result<T, CalcError>;
