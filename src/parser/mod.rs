//! Parser Module
//!
//! Groups tokens into a tree of S-expression and Q-expression nodes.

mod ast;
mod sexpr_parser;

pub use ast::Node;
pub use sexpr_parser::SExprParser;
