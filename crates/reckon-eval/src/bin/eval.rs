//! Command-line front end: evaluate the expression given as arguments.
//!
//! ```text
//! $ eval '200 * 50%'
//! 100
//! ```

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let expr = env::args().skip(1).collect::<Vec<_>>().join(" ");

    match reckon_eval::evaluate_display(&expr) {
        Ok(Some(result)) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("usage: eval <expression>");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
