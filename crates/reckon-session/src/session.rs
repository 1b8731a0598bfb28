//! The calculator session: expression buffer, last result, dispatch.

use crate::Input;
use reckon_types::CalcError;

/// Text shown for an empty buffer.
pub const EMPTY_DISPLAY: &str = "0";

/// Text shown for any evaluation failure.
///
/// All three failure classes collapse to this one string — the historical
/// behavior the engine preserves. The classified errors stay available
/// through [`reckon_eval::evaluate`] for callers that want more.
pub const ERROR_DISPLAY: &str = "Error";

/// Renders display text to the user. The session pushes every new display
/// string through this seam and has no further contract with it.
pub trait DisplaySink {
    fn show(&mut self, text: &str);
}

/// Adapter so a closure can serve as a [`DisplaySink`].
pub struct FnSink<F: FnMut(&str)>(pub F);

impl<F: FnMut(&str)> DisplaySink for FnSink<F> {
    fn show(&mut self, text: &str) {
        (self.0)(text)
    }
}

/// A single calculator session.
///
/// Owns the in-progress expression text and the most recent successful
/// result (used to seed the buffer for chaining). Single-threaded and
/// synchronous: each input is handled to completion.
#[derive(Debug, Default)]
pub struct Session {
    /// The in-progress expression.
    buffer: String,
    /// Most recent successfully evaluated value, formatted for display.
    last_result: Option<String>,
    /// The classified error behind the most recent "Error" display.
    last_error: Option<CalcError>,
}

impl Session {
    /// Create a session with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current expression buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The most recent successful result, if any.
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// The classified error behind the most recent "Error" display, for
    /// callers that want more than the collapsed text.
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// The text a display should currently show.
    pub fn display(&self) -> String {
        if self.buffer.is_empty() {
            EMPTY_DISPLAY.to_string()
        } else {
            self.buffer.clone()
        }
    }

    /// Handle one input event and return the new display text.
    pub fn handle(&mut self, input: Input) -> String {
        match input {
            Input::Literal(ch) => {
                self.buffer.push(ch);
                self.display()
            }
            Input::Delete => {
                self.buffer.pop();
                self.display()
            }
            Input::Clear => {
                self.buffer.clear();
                self.last_result = None;
                self.last_error = None;
                self.display()
            }
            Input::Equals => self.evaluate(),
        }
    }

    /// Handle one input event and forward the display text to a sink.
    pub fn dispatch(&mut self, input: Input, sink: &mut impl DisplaySink) {
        let text = self.handle(input);
        sink.show(&text);
    }

    /// Evaluate the buffer. On success the result becomes both the display
    /// text and the new buffer (chaining); on failure the display shows
    /// [`ERROR_DISPLAY`] and the buffer resets. An empty buffer is a no-op.
    fn evaluate(&mut self) -> String {
        match reckon_eval::evaluate_display(&self.buffer) {
            Ok(Some(result)) => {
                self.buffer = result.clone();
                self.last_result = Some(result.clone());
                self.last_error = None;
                result
            }
            Ok(None) => self.display(),
            Err(err) => {
                self.buffer.clear();
                self.last_error = Some(err);
                ERROR_DISPLAY.to_string()
            }
        }
    }
}
