//! in src/evaluator.rs
//!
//! Contains the logic for the evaluator: text in, number out.

use crate::{
	config::{EvalConfig, NumberParsing},
	error::EvalError,
	factory::OperationFactory,
	lexer::Lexer,
	operation::Operation,
	token_type::{Token, TokenType},
};

/// Turns `"<number> <operator> <number>"` into a result.
///
/// Holds no state between calls, so the same input always evaluates the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
	config: EvalConfig,
	factory: OperationFactory,
}

impl Evaluator {
	pub fn new(config: EvalConfig) -> Self {
		Self { config, factory: OperationFactory::new(config.unknown_operator) }
	}

	pub fn config(&self) -> &EvalConfig {
		&self.config
	}

	/// splits the expression and asks the factory for the matching operation
	pub fn parse(&self, expression: &str) -> Result<Box<dyn Operation>, EvalError> {
		let tokens: Vec<Token<'_>> = Lexer::new(expression).collect();

		let [lhs, op, rhs] = tokens.as_slice() else {
			// point at the surplus, or at the end when something is missing
			let span = match tokens.get(3) {
				Some(extra) => extra.offset..expression.len(),
				None => expression.len()..expression.len(),
			};
			return Err(malformed(
				expression,
				span,
				format!("expected `<number> <operator> <number>`, found {} token(s)", tokens.len()),
			));
		};

		let lhs = self.operand(expression, lhs)?;
		let rhs = self.operand(expression, rhs)?;

		self.factory.create_within(lhs, rhs, op.origin, expression, op.span())
	}

	pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
		Ok(self.parse(expression)?.compute()?)
	}

	fn operand(&self, expression: &str, token: &Token<'_>) -> Result<f64, EvalError> {
		match (token.kind, self.config.numbers) {
			(TokenType::Number(n), _) => Ok(n),
			(_, NumberParsing::Lenient) => {
				log::debug!("`{}` is not a number, using NaN", token.origin);
				Ok(f64::NAN)
			},
			(_, NumberParsing::Strict) => Err(malformed(
				expression,
				token.span(),
				format!("`{}` is not a number", token.origin),
			)),
		}
	}
}

fn malformed(expression: &str, span: std::ops::Range<usize>, reason: String) -> EvalError {
	EvalError::MalformedInput { reason, src: expression.to_string(), span: span.into() }
}

/// evaluates with the default configuration
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
	Evaluator::default().evaluate(expression)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		config::UnknownOperatorPolicy,
		error::OperationError,
		token_type::OperatorKind,
	};

	#[test]
	fn adds_two_numbers() {
		assert_eq!(evaluate("10 + 10"), Ok(20.0));
	}

	#[test]
	fn negative_results_are_still_values() {
		assert_eq!(evaluate("5 - 10"), Ok(-5.0));
	}

	#[test]
	fn negative_operands_are_invalid() {
		assert_eq!(
			evaluate("-5 + 10"),
			Err(EvalError::Operation(OperationError::InvalidOperands { lhs: -5.0, rhs: 10.0 }))
		);
	}

	#[test]
	fn division_by_zero_is_infinite() {
		assert_eq!(evaluate("10 / 0"), Ok(f64::INFINITY));
	}

	#[test]
	fn fractional_operands() {
		assert_eq!(evaluate("2.5 * 4"), Ok(10.0));
		assert_eq!(evaluate("1 / 4"), Ok(0.25));
	}

	#[test]
	fn unknown_operator_divides_by_default() {
		assert_eq!(evaluate("9 % 3"), Ok(3.0));
	}

	#[test]
	fn unknown_operator_is_an_error_when_rejected() {
		let evaluator = Evaluator::new(EvalConfig::default().with_unknown_operator(UnknownOperatorPolicy::Reject));
		match evaluator.evaluate("9 % 3") {
			Err(EvalError::UnknownOperator { token, span, .. }) => {
				assert_eq!(token, "%");
				assert_eq!(span.offset(), 2);
				assert_eq!(span.len(), 1);
			},
			other => panic!("expected UnknownOperator, got {other:?}"),
		}
	}

	#[test]
	fn parse_builds_the_right_variant() {
		let evaluator = Evaluator::default();
		assert_eq!(evaluator.parse("1 * 2").unwrap().kind(), OperatorKind::Multiply);
		assert_eq!(evaluator.parse("1 - 2").unwrap().kind(), OperatorKind::Subtract);
	}

	#[test]
	fn wrong_token_counts_are_malformed() {
		for input in ["", "10", "10 +", "1 + 2 + 3"] {
			let err = evaluate(input).unwrap_err();
			assert!(matches!(err, EvalError::MalformedInput { .. }), "{input:?} gave {err:?}");
		}
	}

	#[test]
	fn surplus_tokens_are_labelled() {
		match evaluate("1 + 2 + 3") {
			Err(EvalError::MalformedInput { span, .. }) => {
				assert_eq!(span.offset(), 6);
				assert_eq!(span.len(), 3);
			},
			other => panic!("expected MalformedInput, got {other:?}"),
		}
	}

	#[test]
	fn non_numeric_operands_are_malformed_when_strict() {
		match evaluate("ten + 1") {
			Err(EvalError::MalformedInput { reason, span, .. }) => {
				assert_eq!(reason, "`ten` is not a number");
				assert_eq!(span.offset(), 0);
				assert_eq!(span.len(), 3);
			},
			other => panic!("expected MalformedInput, got {other:?}"),
		}
	}

	#[test]
	fn non_numeric_operands_become_nan_when_lenient() {
		let evaluator = Evaluator::new(EvalConfig::default().with_numbers(NumberParsing::Lenient));
		let err = evaluator.evaluate("ten + 1").unwrap_err();
		assert!(matches!(err, EvalError::Operation(OperationError::InvalidOperands { lhs, .. }) if lhs.is_nan()));
	}

	#[test]
	fn evaluation_is_repeatable() {
		let evaluator = Evaluator::default();
		let first = evaluator.evaluate("7 * 6");
		for _ in 0..5 {
			assert_eq!(evaluator.evaluate("7 * 6"), first);
		}
	}
}
