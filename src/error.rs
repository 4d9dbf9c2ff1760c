//! src/error.rs
//!
//! error kinds surfaced by operations and the evaluator
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Raised by [`crate::operation::Operation::compute`] when validation fails.
#[derive(Diagnostic, Debug, Error, Clone, Copy, PartialEq)]
pub enum OperationError {
	#[error("Invalid operation: operands {lhs} and {rhs} must both be non-negative")]
	#[diagnostic(code(opcalc::invalid_operands))]
	InvalidOperands { lhs: f64, rhs: f64 },
}

/// Everything that can go wrong while turning an expression into a number.
#[derive(Diagnostic, Debug, Error, Clone, PartialEq)]
pub enum EvalError {
	#[error(transparent)]
	#[diagnostic(transparent)]
	Operation(#[from] OperationError),

	#[error("Unknown operator `{token}`")]
	#[diagnostic(code(opcalc::unknown_operator), help("expected one of + - * /"))]
	UnknownOperator {
		token: String,
		#[source_code]
		src: String,
		#[label("this operator")]
		span: SourceSpan,
	},

	#[error("Malformed input: {reason}")]
	#[diagnostic(code(opcalc::malformed_input), help("expressions look like `10 + 10`"))]
	MalformedInput {
		reason: String,
		#[source_code]
		src: String,
		#[label("here")]
		span: SourceSpan,
	},
}

impl EvalError {
	/// problems with the text itself, as opposed to the arithmetic
	pub fn is_input_error(&self) -> bool {
		matches!(self, EvalError::MalformedInput { .. } | EvalError::UnknownOperator { .. })
	}
}
