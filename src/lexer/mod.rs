//! Lexical analysis for Lispy
//!
//! Converts source text into a stream of tokens. Parentheses delimit
//! S-expressions and braces delimit Q-expressions.

mod sexpr_scanner;
mod token;

pub use sexpr_scanner::SExprScanner;
pub use token::{Token, TokenKind};
