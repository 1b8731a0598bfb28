use crate::Span;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a non-finite evaluation result was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MathErrorKind {
    /// Result was positive or negative infinity (e.g. `5/0`).
    Infinite,
    /// Result was NaN (e.g. `0/0`).
    NotANumber,
}

impl std::fmt::Display for MathErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Infinite => f.write_str("infinite"),
            Self::NotANumber => f.write_str("not a number"),
        }
    }
}

/// A classified evaluation failure.
///
/// The three variants match the de-facto failure classes of the calculator:
/// untrusted characters, an undefined arithmetic result, and everything the
/// parser rejects. The session layer collapses all of them to the single
/// display text `"Error"`; the structured variants exist for tooling and
/// for the wasm JSON surface.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalcError {
    /// A character outside `{0-9 + - * / ( ) . % whitespace}` was found.
    #[error("invalid character '{ch}' at offset {at}")]
    InvalidCharacters { ch: char, at: usize },

    /// The arithmetic result was not a finite number.
    #[error("math error: result is {reason}")]
    Math { reason: MathErrorKind },

    /// The expression was malformed: unbalanced parentheses, a trailing
    /// operator, a stray `%`, a bad numeric literal, and so on.
    #[error("evaluation error at {span}: {message}")]
    Evaluation { message: String, span: Span },
}

impl CalcError {
    /// Shorthand for an [`CalcError::Evaluation`] failure.
    pub fn evaluation(message: impl Into<String>, span: Span) -> Self {
        Self::Evaluation {
            message: message.into(),
            span,
        }
    }

    /// Shorthand for an infinite-result math failure.
    pub fn infinite() -> Self {
        Self::Math {
            reason: MathErrorKind::Infinite,
        }
    }

    /// Shorthand for a NaN-result math failure.
    pub fn not_a_number() -> Self {
        Self::Math {
            reason: MathErrorKind::NotANumber,
        }
    }

    /// `true` for the [`CalcError::Math`] classification.
    pub fn is_math(&self) -> bool {
        matches!(self, Self::Math { .. })
    }

    /// `true` for the [`CalcError::InvalidCharacters`] classification.
    pub fn is_invalid_characters(&self) -> bool {
        matches!(self, Self::InvalidCharacters { .. })
    }

    /// `true` for the [`CalcError::Evaluation`] classification.
    pub fn is_evaluation(&self) -> bool {
        matches!(self, Self::Evaluation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_characters() {
        let err = CalcError::InvalidCharacters { ch: ';', at: 3 };
        assert_eq!(err.to_string(), "invalid character ';' at offset 3");
    }

    #[test]
    fn test_display_math() {
        assert_eq!(
            CalcError::infinite().to_string(),
            "math error: result is infinite"
        );
        assert_eq!(
            CalcError::not_a_number().to_string(),
            "math error: result is not a number"
        );
    }

    #[test]
    fn test_display_evaluation() {
        let err = CalcError::evaluation("unexpected token '*'", Span::new(2, 3));
        assert_eq!(err.to_string(), "evaluation error at 2..3: unexpected token '*'");
    }

    #[test]
    fn test_classification_predicates() {
        assert!(CalcError::InvalidCharacters { ch: 'a', at: 0 }.is_invalid_characters());
        assert!(CalcError::infinite().is_math());
        assert!(CalcError::evaluation("x", Span::point(0)).is_evaluation());
        assert!(!CalcError::infinite().is_evaluation());
    }

    #[test]
    fn test_json_serialization_tags_kind() {
        let err = CalcError::InvalidCharacters { ch: ';', at: 3 };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"kind\":\"invalid_characters\""));
        assert!(json.contains("\"at\":3"));

        let err = CalcError::infinite();
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"kind\":\"math\""));

        // Round-trip
        let back: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CalcError::infinite());
    }
}
