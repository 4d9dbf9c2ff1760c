//! src/operation.rs
//!
//! The contract every arithmetic operation implements.
//!
//! Operations are built in two phases: construction never checks anything,
//! [`Operation::validate`] decides whether the operands are acceptable and
//! [`Operation::compute`] runs the variant's rule only when they are.

use crate::{error::OperationError, token_type::OperatorKind};

/// Legacy "invalid operation" value returned by [`Operation::compute_with_sentinel`].
pub const SENTINEL: f64 = -1.0;

/// the two inputs of an operation, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
	lhs: f64,
	rhs: f64,
}

impl Operands {
	pub fn new(lhs: f64, rhs: f64) -> Self {
		Self { lhs, rhs }
	}

	pub fn lhs(&self) -> f64 {
		self.lhs
	}

	pub fn rhs(&self) -> f64 {
		self.rhs
	}

	/// shared rule: both operands are non-negative (NaN is rejected too)
	pub fn both_non_negative(&self) -> bool {
		self.lhs >= 0.0 && self.rhs >= 0.0
	}
}

pub trait Operation: std::fmt::Debug + Send + Sync {
	/// which variant this is
	fn kind(&self) -> OperatorKind;

	fn operands(&self) -> Operands;

	/// The variant's computation rule. Callers should go through [`Operation::compute`].
	fn perform(&self) -> f64;

	fn validate(&self) -> bool {
		self.operands().both_non_negative()
	}

	fn compute(&self) -> Result<f64, OperationError> {
		if self.validate() {
			let value = self.perform();
			log::debug!("{} {} {} = {value}", self.operands().lhs(), self.kind(), self.operands().rhs());
			Ok(value)
		} else {
			let Operands { lhs, rhs } = self.operands();
			log::debug!("rejected operands {lhs} {} {rhs}", self.kind());
			Err(OperationError::InvalidOperands { lhs, rhs })
		}
	}

	/// [`Operation::compute`] with failures collapsed into [`SENTINEL`]
	fn compute_with_sentinel(&self) -> f64 {
		self.compute().unwrap_or(SENTINEL)
	}
}
