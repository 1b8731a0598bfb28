//! Reckon calculator as a WASM module for browser environments.
//!
//! Exposes the evaluation pipeline and a stateful calculator session via
//! `wasm-bindgen`, suitable for wiring to a button pad and a `keydown`
//! handler.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { Calculator, evaluate } from 'reckon-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(evaluate("200*50%"));
//! // { success: true, value: 100, display: "100", error: null }
//!
//! const calc = new Calculator();
//! display.textContent = calc.press("2");
//! display.textContent = calc.key("Enter");
//! ```

use reckon_session::{Input, Session};
use reckon_types::CalcError;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// The JSON shape returned by [`evaluate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalResponse {
    /// `true` when the expression produced a finite value (or was empty).
    pub success: bool,
    /// The numeric result; `null` for empty input or on failure.
    pub value: Option<f64>,
    /// The result formatted for display; `null` for empty input or on failure.
    pub display: Option<String>,
    /// The classified error; `null` on success.
    pub error: Option<CalcError>,
}

impl EvalResponse {
    fn from_outcome(outcome: Result<Option<f64>, CalcError>) -> Self {
        match outcome {
            Ok(value) => Self {
                success: true,
                display: value.map(reckon_eval::format_number),
                value,
                error: None,
            },
            Err(err) => Self {
                success: false,
                value: None,
                display: None,
                error: Some(err),
            },
        }
    }
}

/// Evaluate an expression and return the result as a JSON string.
///
/// ```json
/// { "success": true, "value": 4, "display": "4", "error": null }
/// { "success": false, "value": null, "display": null,
///   "error": { "kind": "math", "message": "..." } }
/// ```
#[wasm_bindgen]
pub fn evaluate(expr: &str) -> String {
    let response = EvalResponse::from_outcome(reckon_eval::evaluate(expr));
    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"value":null,"display":null,"error":{{"kind":"evaluation","message":"serialization error: {e}"}}}}"#
        )
    })
}

/// Evaluate an expression and return the result as a JS object
/// (no JSON round-trip).
#[wasm_bindgen]
pub fn evaluate_value(expr: &str) -> JsValue {
    let response = EvalResponse::from_outcome(reckon_eval::evaluate(expr));
    serde_wasm_bindgen::to_value(&response).unwrap_or(JsValue::NULL)
}

/// Return the engine version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// A stateful calculator session for direct UI wiring.
///
/// Every method returns the text the display should now show; the caller
/// renders it verbatim.
#[wasm_bindgen]
#[derive(Default)]
pub struct Calculator {
    session: Session,
}

#[wasm_bindgen]
impl Calculator {
    /// Create a calculator with an empty expression buffer.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Calculator {
        Calculator {
            session: Session::new(),
        }
    }

    /// Append a literal button token (digit, operator, `.`, `%`, paren).
    /// Unknown tokens leave the session untouched.
    pub fn press(&mut self, token: &str) -> String {
        let mut chars = token.chars();
        let input = match (chars.next(), chars.next()) {
            (Some(ch), None) => Input::literal(ch),
            _ => None,
        };
        match input {
            Some(input) => self.session.handle(input),
            None => self.session.display(),
        }
    }

    /// Run a named action: `"clear"`, `"delete"`, or `"equals"`.
    pub fn action(&mut self, name: &str) -> String {
        match Input::from_action(name) {
            Some(input) => self.session.handle(input),
            None => self.session.display(),
        }
    }

    /// Feed a keyboard key (DOM `KeyboardEvent.key`). Unmapped keys are
    /// ignored.
    pub fn key(&mut self, key: &str) -> String {
        match Input::from_key(key) {
            Some(input) => self.session.handle(input),
            None => self.session.display(),
        }
    }

    /// The text the display should currently show.
    pub fn display(&self) -> String {
        self.session.display()
    }
}
