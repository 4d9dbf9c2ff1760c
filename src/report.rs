//! src/report.rs
//!
//! the line a user sees for an evaluated expression

use crate::{config::ReportPolicy, error::EvalError};

pub const INVALID_OPERATION: &str = "Invalid operation";

/// Renders `"<expression> = <value>"`, or [`INVALID_OPERATION`].
///
/// Under [`ReportPolicy::SignCheck`] a result is shown only when it is `>= 0`,
/// so negative values and NaN are both invalid.
///
/// Input errors (malformed text, rejected operators) are problems with the
/// text rather than results and are handed back for the caller to display.
pub fn render(expression: &str, result: Result<f64, EvalError>, policy: ReportPolicy) -> Result<String, EvalError> {
	match result {
		Ok(value) if policy == ReportPolicy::SignCheck && (value < 0.0 || value.is_nan()) => Ok(INVALID_OPERATION.to_string()),
		Ok(value) => Ok(format!("{} = {value}", expression.trim())),
		Err(e) if e.is_input_error() => Err(e),
		Err(e) => {
			log::info!("{e}");
			Ok(INVALID_OPERATION.to_string())
		},
	}
}
