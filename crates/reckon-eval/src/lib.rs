//! Reckon expression evaluator.
//!
//! The pipeline behind [`evaluate`]:
//! 1. emptiness check — blank input is a defined no-op, not an error
//! 2. character whitelist check
//! 3. percent transform (`50%` → `(50/100)`)
//! 4. division/multiplication glyph normalization
//! 5. lex → parse (operator precedence, parentheses) → tree-walk eval
//! 6. result classification: non-finite fails as a math error, finite
//!    results are rounded to 10 decimal places
//!
//! Step 5 replaces the historical compile-the-string-at-runtime approach
//! with a real parser, so no interpreted code ever runs.

mod evaluator;
mod format;
mod prepare;

pub use format::{format_number, round_result};
pub use prepare::{check_charset, normalize_glyphs, transform_percent};

use reckon_lexer::Lexer;
use reckon_parser::Parser;
use reckon_types::{CalcError, Result};

/// Evaluate a raw expression string.
///
/// Returns `Ok(None)` for empty (or whitespace-only) input, `Ok(Some(n))`
/// for a finite result, and a classified [`CalcError`] otherwise. Pure
/// function of its input.
pub fn evaluate(expr: &str) -> Result<Option<f64>> {
    if expr.trim().is_empty() {
        return Ok(None);
    }

    check_charset(expr)?;
    let transformed = transform_percent(expr);
    let sanitized = normalize_glyphs(&transformed);

    let tokens = Lexer::new(&sanitized).lex()?;
    let ast = Parser::new(tokens).parse()?;
    let value = evaluator::eval_expr(&ast);

    if value.is_nan() {
        return Err(CalcError::not_a_number());
    }
    if value.is_infinite() {
        return Err(CalcError::infinite());
    }

    Ok(Some(round_result(value)))
}

/// Evaluate and format for display.
///
/// Same contract as [`evaluate`], with the finite result rendered as the
/// display string (trailing zeros stripped).
pub fn evaluate_display(expr: &str) -> Result<Option<String>> {
    Ok(evaluate(expr)?.map(format_number))
}
