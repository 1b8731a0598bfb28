//! Input events and the keyboard mapping.
//!
//! The session does not care whether an event came from a pointer click
//! or a keystroke; both surfaces reduce to the same [`Input`] values.

/// A discrete input event: either a literal token for the expression
/// buffer or a named control action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit, operator, `.`, `%`, or parenthesis to append.
    Literal(char),
    /// Reset the buffer and the last result.
    Clear,
    /// Remove the last character from the buffer.
    Delete,
    /// Evaluate the buffer.
    Equals,
}

impl Input {
    /// Build a literal input, accepting only buffer-safe characters.
    ///
    /// Returns `None` for anything outside `{0-9 + - * / ( ) . %}` — this
    /// is how the buffer invariant (trusted characters only) is upheld at
    /// the entry point.
    pub fn literal(ch: char) -> Option<Self> {
        let ok = ch.is_ascii_digit() || matches!(ch, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%');
        ok.then_some(Self::Literal(ch))
    }

    /// Map a keyboard key name (DOM `KeyboardEvent.key` style) to an input.
    ///
    /// `Enter` and `=` trigger evaluation, `Backspace` deletes, `Escape`
    /// clears; single whitelisted characters append. Unknown keys are
    /// ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Equals),
            "Backspace" => Some(Self::Delete),
            "Escape" => Some(Self::Clear),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::literal(ch),
                    _ => None,
                }
            }
        }
    }

    /// Map a named action (`"clear"`, `"delete"`, `"equals"`) to an input.
    pub fn from_action(name: &str) -> Option<Self> {
        match name {
            "clear" => Some(Self::Clear),
            "delete" => Some(Self::Delete),
            "equals" => Some(Self::Equals),
            _ => None,
        }
    }
}
