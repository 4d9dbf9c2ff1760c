use crate::token_type::{OperatorKind, Token, TokenType};

/// The `Lexer` struct is responsible for tokenizing the input string.
/// It holds the remaining unprocessed part of the string and the current
/// byte index for tracking the position in the string.
///
/// Tokens are maximal runs of non-whitespace characters, so `-5` is a number
/// while a lone `-` is an operator.
#[derive(Debug, Clone)]
pub struct Lexer<'de> {
	/// holds the remainder of the String
	rest: &'de str,
	/// to keep track of the index we're at
	byte: usize,
}

impl<'de> Lexer<'de> {
	/// Creates a new `Lexer` instance with the given input string.
	pub fn new(input: &'de str) -> Self {
		Self { rest: input, byte: 0 }
	}
}

impl<'de> Iterator for Lexer<'de> {
	type Item = Token<'de>;

	fn next(&mut self) -> Option<Self::Item> {
		// skip leading whitespace
		let trimmed = self.rest.trim_start();
		self.byte += self.rest.len() - trimmed.len();
		self.rest = trimmed;

		if self.rest.is_empty() {
			return None;
		}

		let end = self.rest.find(char::is_whitespace).unwrap_or(self.rest.len());
		let literal = &self.rest[..end];
		let offset = self.byte;

		self.rest = &self.rest[end..];
		self.byte += end;

		let kind = if let Some(op) = OperatorKind::from_symbol(literal) {
			TokenType::Operator(op)
		} else if let Ok(n) = literal.parse::<f64>() {
			TokenType::Number(n)
		} else {
			TokenType::Word
		};

		log::trace!("lexed {kind:?} `{literal}` at byte {offset}");

		Some(Token { origin: literal, offset, kind })
	}
}
