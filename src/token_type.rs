use std::fmt::{self};

/// a single whitespace-delimited piece of the expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'de> {
	/// holds the characters as &str
	pub origin: &'de str,
	/// byte offset of `origin` inside the whole input
	pub offset: usize,
	/// holds the type
	pub kind: TokenType,
}

impl Token<'_> {
	/// byte range covered by this token, for diagnostics
	pub fn span(&self) -> std::ops::Range<usize> {
		self.offset..self.offset + self.origin.len()
	}
}

/// The `TokenType` enum represents the different kinds of tokens the lexer recognizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenType {
	/// text that parses as a float
	Number(f64),
	/// one of the four operator symbols
	Operator(OperatorKind),
	/// anything else
	Word,
}

/// The closed set of arithmetic operators, one per operation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
	Add,
	Subtract,
	Multiply,
	Divide,
}

impl OperatorKind {
	pub const ALL: [OperatorKind; 4] =
		[OperatorKind::Add, OperatorKind::Subtract, OperatorKind::Multiply, OperatorKind::Divide];

	/// strict lookup, no fallback
	pub fn from_symbol(symbol: &str) -> Option<Self> {
		match symbol {
			"+" => Some(OperatorKind::Add),
			"-" => Some(OperatorKind::Subtract),
			"*" => Some(OperatorKind::Multiply),
			"/" => Some(OperatorKind::Divide),
			_ => None,
		}
	}

	pub fn symbol(self) -> &'static str {
		match self {
			OperatorKind::Add => "+",
			OperatorKind::Subtract => "-",
			OperatorKind::Multiply => "*",
			OperatorKind::Divide => "/",
		}
	}

	/// name used by the `tokenize` output
	pub fn token_name(self) -> &'static str {
		match self {
			OperatorKind::Add => "PLUS",
			OperatorKind::Subtract => "MINUS",
			OperatorKind::Multiply => "STAR",
			OperatorKind::Divide => "SLASH",
		}
	}
}

impl fmt::Display for OperatorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.symbol())
	}
}

impl fmt::Display for Token<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let origin = self.origin;
		match self.kind {
			TokenType::Number(n) => {
				// keep a trailing `.0` so integers read as floats
				if n == n.trunc() {
					write!(f, "NUMBER {origin} {n}.0")
				} else {
					write!(f, "NUMBER {origin} {n}")
				}
			},
			TokenType::Operator(op) => write!(f, "{} {origin} null", op.token_name()),
			TokenType::Word => write!(f, "WORD {origin} null"),
		}
	}
}
