//! Result rounding and display formatting.

/// Round to 10 decimal places to suppress floating-point noise, the same
/// way the calculator historically did (`toFixed(10)` then re-parse).
///
/// Only called on finite values; the pipeline rejects non-finite results
/// before rounding.
pub fn round_result(value: f64) -> f64 {
    format!("{value:.10}").parse().unwrap_or(value)
}

/// Format a result for display: plain decimal, trailing zeros stripped
/// (`4`, not `4.0000000000`).
pub fn format_number(value: f64) -> String {
    value.to_string()
}
