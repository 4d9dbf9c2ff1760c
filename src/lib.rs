pub mod config;
pub mod error;
pub mod evaluator;
pub mod factory;
pub mod lexer;
pub mod operation;
pub mod report;
pub mod token_type;
pub mod variants;

pub use config::EvalConfig;
pub use error::{EvalError, OperationError};
pub use evaluator::{evaluate, Evaluator};
pub use factory::OperationFactory;
pub use lexer::Lexer;
pub use operation::Operation;
