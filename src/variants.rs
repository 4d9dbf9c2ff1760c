//! src/variants.rs
//!
//! the four concrete operations
use crate::operation::{Operands, Operation};
use crate::token_type::OperatorKind;

/// lhs + rhs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Add(Operands);

/// lhs - rhs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subtract(Operands);

/// lhs * rhs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multiply(Operands);

/// lhs / rhs, with no guard against a zero divisor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divide(Operands);

macro_rules! constructors {
	($($variant:ident),*) => {
		$(
			impl $variant {
				pub fn new(lhs: f64, rhs: f64) -> Self {
					Self(Operands::new(lhs, rhs))
				}
			}
		)*
	};
}

constructors!(Add, Subtract, Multiply, Divide);

impl Operation for Add {
	fn kind(&self) -> OperatorKind {
		OperatorKind::Add
	}

	fn operands(&self) -> Operands {
		self.0
	}

	fn perform(&self) -> f64 {
		self.0.lhs() + self.0.rhs()
	}
}

impl Operation for Subtract {
	fn kind(&self) -> OperatorKind {
		OperatorKind::Subtract
	}

	fn operands(&self) -> Operands {
		self.0
	}

	fn perform(&self) -> f64 {
		self.0.lhs() - self.0.rhs()
	}
}

impl Operation for Multiply {
	fn kind(&self) -> OperatorKind {
		OperatorKind::Multiply
	}

	fn operands(&self) -> Operands {
		self.0
	}

	fn perform(&self) -> f64 {
		self.0.lhs() * self.0.rhs()
	}
}

impl Operation for Divide {
	fn kind(&self) -> OperatorKind {
		OperatorKind::Divide
	}

	fn operands(&self) -> Operands {
		self.0
	}

	// same rule as the default, spelled out for division
	fn validate(&self) -> bool {
		self.0.lhs() >= 0.0 && self.0.rhs() >= 0.0
	}

	fn perform(&self) -> f64 {
		self.0.lhs() / self.0.rhs()
	}
}
