//! Reckon parser: converts a token stream into an arithmetic AST.

mod parse_expr;
mod parser;

pub use parser::Parser;
