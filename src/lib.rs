//! # Lispy - a small Lisp with Q-expressions
//!
//! An interpreter for a minimal Lisp dialect where code and data share one
//! representation. Parenthesized S-expressions are evaluated; brace-delimited
//! Q-expressions are quoted lists that builtins can take apart, rebuild and
//! evaluate on demand.
//!
//! ## Quick Start
//!
//! ```rust
//! use lispy::{Evaluator, Value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut evaluator = Evaluator::new();
//! evaluator.run(r"(def {add} (\ {x y} {+ x y}))")?;
//!
//! // Partial application returns a function waiting for `y`
//! let result = evaluator.run("((add 5) 3)")?;
//! assert_eq!(result, Value::Number(8));
//!
//! let result = evaluator.run("(eval (join {+} (tail {0 1 2 3})))")?;
//! assert_eq!(result, Value::Number(6));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → Nodes → Reader → Values → Evaluator
//! ```
//!
//! - [`Scanner`] - Tokenizes source code
//! - [`Parser`] - Groups tokens into syntax nodes
//! - [`reader`] - Turns nodes into runtime values
//! - [`Evaluator`] - Evaluates values against an [`Environment`]
//! - [`Builtin`] - Native functions bound in the global frame
//!
//! ## Error Handling
//!
//! Language errors are ordinary values: evaluation never fails, it produces
//! [`Value::Error`]. Only reading source text returns `Err`.
//!
//! ```rust
//! # use lispy::{Error, Evaluator, Value};
//! let mut evaluator = Evaluator::new();
//! let result = evaluator.run("(/ 10 0)").unwrap();
//! assert_eq!(result, Value::Error(Error::DivideByZero));
//! assert_eq!(result.to_string(), "Error: Division By Zero!");
//! ```

/// Version of the interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod builtins;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod reader;
pub mod repl;
pub mod runtime;

// Re-export main types
pub use builtins::Builtin;
pub use error::{Error, ErrorKind, Result};
pub use lexer::{SExprScanner, Token, TokenKind};
pub use parser::{Node, SExprParser};
pub use repl::ReplConfig;
pub use runtime::{
    EnvId, Environment, Evaluator, EvaluatorConfig, Frame, Function, Lambda, Output, Value,
};

/// Type alias for the S-expression scanner (lexer).
/// Converts raw source text into tokens for the parser.
pub type Scanner = SExprScanner;

/// Type alias for the S-expression parser.
/// Converts tokens into syntax nodes.
pub type Parser = SExprParser;
