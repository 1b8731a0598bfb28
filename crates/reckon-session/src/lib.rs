//! Reckon session controller.
//!
//! Owns the expression buffer and the last result, dispatches trigger
//! events to the evaluator, and produces the text a display should show.

mod input;
mod session;

pub use input::Input;
pub use session::{DisplaySink, FnSink, Session, EMPTY_DISPLAY, ERROR_DISPLAY};
