//! Reckon lexer: converts an expression string into a token stream.

mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
