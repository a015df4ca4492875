//! Error types for the Lispy interpreter
//!
//! Errors play two roles. While scanning and parsing they are ordinary Rust
//! errors returned through [`Result`]. Once evaluation starts they become
//! first-class values: an [`Error`] is wrapped in `Value::Error` and flows
//! through the program like any other value.

use thiserror::Error;

/// Lispy interpreter errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Parse errors
    /// Syntax error encountered while scanning or parsing
    ///
    /// **Triggered by:** Invalid characters, bad escapes, stray closing delimiters
    /// **Example:** `(+ 1 2}` (brace closes a parenthesis)
    #[error("Syntax error at line {line}, column {col}: {message}")]
    SyntaxError {
        /// Line number where error occurred
        line: usize,
        /// Column number where error occurred
        col: usize,
        /// Error description
        message: String,
    },

    /// Input ended inside a string literal
    ///
    /// **Example:** `(print "hello` with the closing quote on a later line
    #[error("Syntax error at line {line}, column {col}: Unterminated string")]
    UnterminatedString {
        /// Line where the string starts
        line: usize,
        /// Column of the opening quote
        col: usize,
    },

    /// Input ended while a group was still open
    #[error("Unexpected end of input: expected '{expected}'")]
    UnexpectedEof {
        /// The closing delimiter that was never seen
        expected: char,
    },

    // Runtime errors
    /// Reference to a symbol with no binding anywhere in the environment chain
    ///
    /// **Triggered by:** Evaluating a symbol that was never defined
    /// **Example:** `(+ x 1)` when `x` is unbound
    /// **Prevention:** Bind names with `def` or `=` before use
    #[error("Unbound symbol '{name}'")]
    UnboundSymbol {
        /// Symbol name
        name: String,
    },

    /// An argument had the wrong type
    ///
    /// **Triggered by:** `(head 1)`, `(+ 1 {2})`, `(1 2 3)` (applying a non-function)
    #[error("Function '{op}' passed incorrect type for argument {index}. Got {got}, Expected {expected}.")]
    TypeMismatch {
        /// Operation name
        op: String,
        /// Zero-based argument position
        index: usize,
        /// Type that was received
        got: String,
        /// Type that was required
        expected: String,
    },

    /// Wrong number of arguments
    #[error("Function '{op}' passed incorrect number of arguments. Got {got}, Expected {expected}.")]
    ArityMismatch {
        /// Operation name
        op: String,
        /// Arguments received
        got: usize,
        /// Arguments accepted
        expected: usize,
    },

    /// Division or remainder by zero
    ///
    /// **Triggered by:** `(/ 10 0)`, `(% 5 0)`
    #[error("Division By Zero!")]
    DivideByZero,

    /// `head` or `tail` of an empty Q-expression
    #[error("Function '{op}' passed {{}}!")]
    EmptyListAccess {
        /// Operation name
        op: String,
    },

    /// Malformed formals or definition lists
    ///
    /// **Triggered by:** `(\ {x & } {x})` applied, `(def {1} 2)`
    #[error("Function '{op}' format invalid. {detail}")]
    FormatError {
        /// Operation name
        op: String,
        /// What was wrong
        detail: String,
    },

    /// Source text could not be read into forms
    #[error("Parse failure: {0}")]
    ParseFailure(String),

    /// Error raised by the program itself through `error`
    #[error("{0}")]
    UserError(String),
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Scanner or parser rejected the input
    Syntax,
    /// Symbol lookup failed
    UnboundSymbol,
    /// Argument had the wrong type
    TypeMismatch,
    /// Wrong number of arguments
    ArityMismatch,
    /// Division or remainder by zero
    DivideByZero,
    /// `head`/`tail` on `{}`
    EmptyListAccess,
    /// Malformed formals or definitions
    FormatError,
    /// Reading source for evaluation failed
    ParseFailure,
    /// Raised by `error`
    UserError,
}

impl Error {
    /// Create a type mismatch error
    pub fn type_mismatch(
        op: impl Into<String>,
        index: usize,
        got: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Error::TypeMismatch {
            op: op.into(),
            index,
            got: got.into(),
            expected: expected.into(),
        }
    }

    /// Create an arity mismatch error
    pub fn arity(op: impl Into<String>, got: usize, expected: usize) -> Self {
        Error::ArityMismatch {
            op: op.into(),
            got,
            expected,
        }
    }

    /// Create a format error
    pub fn format(op: impl Into<String>, detail: impl Into<String>) -> Self {
        Error::FormatError {
            op: op.into(),
            detail: detail.into(),
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SyntaxError { .. }
            | Error::UnterminatedString { .. }
            | Error::UnexpectedEof { .. } => ErrorKind::Syntax,
            Error::UnboundSymbol { .. } => ErrorKind::UnboundSymbol,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            Error::DivideByZero => ErrorKind::DivideByZero,
            Error::EmptyListAccess { .. } => ErrorKind::EmptyListAccess,
            Error::FormatError { .. } => ErrorKind::FormatError,
            Error::ParseFailure(_) => ErrorKind::ParseFailure,
            Error::UserError(_) => ErrorKind::UserError,
        }
    }

    /// Wrap a scanner/parser error so it can be carried as an evaluation result.
    ///
    /// Errors that are already runtime errors are returned unchanged.
    pub fn into_parse_failure(self) -> Self {
        match self {
            Error::SyntaxError { .. }
            | Error::UnterminatedString { .. }
            | Error::UnexpectedEof { .. } => Error::ParseFailure(self.to_string()),
            other => other,
        }
    }
}

/// Result type for Lispy operations
pub type Result<T> = std::result::Result<T, Error>;
