//! src/factory.rs
//!
//! maps an operator token to the matching operation

use std::ops::Range;

use crate::{
	config::UnknownOperatorPolicy,
	error::EvalError,
	operation::Operation,
	token_type::OperatorKind,
	variants::{Add, Divide, Multiply, Subtract},
};

/// Stateless; every call builds a fresh operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationFactory {
	policy: UnknownOperatorPolicy,
}

impl OperationFactory {
	pub fn new(policy: UnknownOperatorPolicy) -> Self {
		Self { policy }
	}

	/// Which variant `token` selects under the current policy, if any.
	///
	/// `+`, `-` and `*` are matched explicitly. Everything else is division
	/// under [`UnknownOperatorPolicy::FallbackToDivide`]; under
	/// [`UnknownOperatorPolicy::Reject`] only `/` is.
	pub fn resolve(&self, token: &str) -> Option<OperatorKind> {
		match (OperatorKind::from_symbol(token), self.policy) {
			(Some(kind), _) => Some(kind),
			(None, UnknownOperatorPolicy::FallbackToDivide) => {
				log::debug!("unrecognized operator `{token}`, falling back to division");
				Some(OperatorKind::Divide)
			},
			(None, UnknownOperatorPolicy::Reject) => None,
		}
	}

	/// builds the operation for an already resolved kind
	pub fn build(kind: OperatorKind, lhs: f64, rhs: f64) -> Box<dyn Operation> {
		match kind {
			OperatorKind::Add => Box::new(Add::new(lhs, rhs)),
			OperatorKind::Subtract => Box::new(Subtract::new(lhs, rhs)),
			OperatorKind::Multiply => Box::new(Multiply::new(lhs, rhs)),
			OperatorKind::Divide => Box::new(Divide::new(lhs, rhs)),
		}
	}

	/// builds the operation `token` selects; a rejected token is labelled on its own text
	pub fn create(&self, lhs: f64, rhs: f64, token: &str) -> Result<Box<dyn Operation>, EvalError> {
		self.create_within(lhs, rhs, token, token, 0..token.len())
	}

	/// like [`OperationFactory::create`], labelling a rejected token at `span` inside `src`
	pub fn create_within(
		&self,
		lhs: f64,
		rhs: f64,
		token: &str,
		src: &str,
		span: Range<usize>,
	) -> Result<Box<dyn Operation>, EvalError> {
		let kind = self.resolve(token).ok_or_else(|| EvalError::UnknownOperator {
			token: token.to_string(),
			src: src.to_string(),
			span: span.into(),
		})?;

		log::trace!("`{token}` dispatched to {kind:?}");

		Ok(Self::build(kind, lhs, rhs))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn kind_of(factory: OperationFactory, token: &str) -> OperatorKind {
		factory.create(1.0, 2.0, token).expect("dispatch").kind()
	}

	#[test]
	fn dispatches_each_symbol() {
		let factory = OperationFactory::default();
		assert_eq!(kind_of(factory, "+"), OperatorKind::Add);
		assert_eq!(kind_of(factory, "-"), OperatorKind::Subtract);
		assert_eq!(kind_of(factory, "*"), OperatorKind::Multiply);
		assert_eq!(kind_of(factory, "/"), OperatorKind::Divide);
	}

	#[test]
	fn unknown_tokens_fall_back_to_division_by_default() {
		let factory = OperationFactory::default();
		assert_eq!(kind_of(factory, "%"), OperatorKind::Divide);
		assert_eq!(kind_of(factory, "plus"), OperatorKind::Divide);
		assert_eq!(kind_of(factory, ""), OperatorKind::Divide);
	}

	#[test]
	fn reject_policy_refuses_unknown_tokens() {
		let factory = OperationFactory::new(UnknownOperatorPolicy::Reject);
		assert_eq!(kind_of(factory, "/"), OperatorKind::Divide);

		let err = factory.create(1.0, 2.0, "%").unwrap_err();
		assert!(matches!(err, EvalError::UnknownOperator { ref token, .. } if token == "%"));
	}

	#[test]
	fn rejected_tokens_are_labelled_inside_the_source() {
		let factory = OperationFactory::new(UnknownOperatorPolicy::Reject);
		match factory.create_within(9.0, 3.0, "mod", "9 mod 3", 2..5).unwrap_err() {
			EvalError::UnknownOperator { token, src, span } => {
				assert_eq!(token, "mod");
				assert_eq!(src, "9 mod 3");
				assert_eq!(span.offset(), 2);
				assert_eq!(span.len(), 3);
			},
			other => panic!("expected UnknownOperator, got {other:?}"),
		}
	}

	#[test]
	fn created_operations_carry_the_operands() {
		let op = OperationFactory::default().create(3.0, 4.0, "*").unwrap();
		assert_eq!(op.operands().lhs(), 3.0);
		assert_eq!(op.operands().rhs(), 4.0);
		assert_eq!(op.compute(), Ok(12.0));
	}
}
