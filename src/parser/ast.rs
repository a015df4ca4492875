use std::fmt;

/// Tagged syntax tree node produced by the parser
///
/// Nodes keep the raw text of atoms; turning them into runtime values
/// (including integer conversion) is the reader's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Integer literal text
    Number(String),
    /// Symbol name
    Symbol(String),
    /// String contents with escapes resolved
    String(String),
    /// Parenthesized group `( ... )`
    SExpr(Vec<Node>),
    /// Brace group `{ ... }`
    QExpr(Vec<Node>),
    /// Line comment
    Comment(String),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Number(n) => write!(f, "{}", n),
            Node::Symbol(s) => write!(f, "{}", s),
            Node::String(s) => write!(f, "{:?}", s),
            Node::SExpr(children) => write_group(f, '(', children, ')'),
            Node::QExpr(children) => write_group(f, '{', children, '}'),
            Node::Comment(c) => write!(f, ";{}", c),
        }
    }
}

fn write_group(f: &mut fmt::Formatter, open: char, children: &[Node], close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", child)?;
    }
    write!(f, "{}", close)
}
