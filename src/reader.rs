//! Conversion of parsed nodes into runtime values
//!
//! Comments are dropped. A number literal that does not fit an `i64`
//! becomes an error value in place, so the rest of the program still reads.

use crate::error::{Error, Result};
use crate::lexer::SExprScanner;
use crate::parser::{Node, SExprParser};
use crate::runtime::Value;

/// Reads one node; comments yield `None`
pub fn read(node: Node) -> Option<Value> {
    let value = match node {
        Node::Number(text) => match text.parse::<i64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Error(Error::ParseFailure(format!("invalid number '{}'", text))),
        },
        Node::Symbol(name) => Value::Symbol(name),
        Node::String(s) => Value::String(s),
        Node::SExpr(children) => Value::SExpr(read_forms(children)),
        Node::QExpr(children) => Value::QExpr(read_forms(children)),
        Node::Comment(_) => return None,
    };
    Some(value)
}

/// Reads a sequence of nodes, skipping comments
pub fn read_forms(nodes: Vec<Node>) -> Vec<Value> {
    nodes.into_iter().filter_map(read).collect()
}

/// Scans, parses and reads a whole source text
pub fn read_source(source: &str) -> Result<Vec<Value>> {
    let tokens = SExprScanner::new(source).scan_tokens()?;
    let nodes = SExprParser::new(tokens).parse()?;
    Ok(read_forms(nodes))
}
