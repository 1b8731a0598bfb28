//! Textual preparation passes that run before lexing.
//!
//! Three passes, in pipeline order:
//! 1. character whitelist check ([`check_charset`])
//! 2. percent transform ([`transform_percent`])
//! 3. division/multiplication glyph normalization ([`normalize_glyphs`])
//!
//! The whitelist runs first, so the glyph pass only ever matters for
//! callers that drive the later passes directly — `5÷2` fails validation,
//! which is the calculator's historical observable behavior.

use reckon_types::{CalcError, Result};

/// Check that every character is in the trusted set
/// `{0-9 + - * / ( ) . % whitespace}`.
///
/// Fails with [`CalcError::InvalidCharacters`] at the first offender, with
/// its byte offset. Nothing outside this set may ever reach the evaluator.
pub fn check_charset(expr: &str) -> Result<()> {
    for (at, ch) in expr.char_indices() {
        let ok = ch.is_ascii_digit()
            || matches!(ch, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%')
            || ch.is_whitespace();
        if !ok {
            return Err(CalcError::InvalidCharacters { ch, at });
        }
    }
    Ok(())
}

/// Rewrite each numeric literal immediately followed by `%` into that
/// literal divided by 100: `50%` becomes `(50/100)`.
///
/// Single left-to-right pass; rewritten output is never re-scanned, so the
/// transform is idempotent once no `%` remains. A `%` not directly after a
/// literal is left in place for the parser to reject.
pub fn transform_percent(expr: &str) -> String {
    let bytes = expr.as_bytes();
    let mut out = String::with_capacity(expr.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            // Scan the literal: \d+(\.\d*)?
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'.' {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let literal = &expr[start..i];
            if bytes.get(i) == Some(&b'%') {
                out.push('(');
                out.push_str(literal);
                out.push_str("/100)");
                i += 1; // consume the '%'
            } else {
                out.push_str(literal);
            }
        } else {
            // Multi-byte characters pass through untouched; advance by
            // whole chars to stay on a boundary.
            let ch = expr[i..].chars().next().unwrap_or('\0');
            out.push(ch);
            i += ch.len_utf8().max(1);
        }
    }

    out
}

/// Normalize alternate arithmetic glyphs: `÷` → `/`, `×` → `*`.
pub fn normalize_glyphs(expr: &str) -> String {
    expr.replace('\u{f7}', "/").replace('\u{d7}', "*")
}
