//! src/config.rs
//!
//! knobs for the behaviours that differ between the compatible and strict modes

/// what the factory does with an operator outside `+ - * /`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownOperatorPolicy {
	/// anything unrecognized becomes a division
	#[default]
	FallbackToDivide,
	/// unrecognized operators are an error
	Reject,
}

/// what the evaluator does with operand text that is not a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberParsing {
	/// report `MalformedInput`
	#[default]
	Strict,
	/// silently use NaN, which then fails validation
	Lenient,
}

/// when a successful result is still reported as `Invalid operation`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportPolicy {
	/// any negative result is reported as invalid
	#[default]
	SignCheck,
	/// only errors are reported as invalid
	ErrorsOnly,
}

/// Evaluation settings. `Default` keeps the historical behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalConfig {
	pub unknown_operator: UnknownOperatorPolicy,
	pub numbers: NumberParsing,
	pub report: ReportPolicy,
}

impl EvalConfig {
	pub fn with_unknown_operator(mut self, policy: UnknownOperatorPolicy) -> Self {
		self.unknown_operator = policy;
		self
	}

	pub fn with_numbers(mut self, numbers: NumberParsing) -> Self {
		self.numbers = numbers;
		self
	}

	pub fn with_report(mut self, report: ReportPolicy) -> Self {
		self.report = report;
		self
	}
}
