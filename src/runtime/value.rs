use std::fmt;

use crate::builtins::Builtin;
use crate::error::{Error, Result};
use crate::runtime::environment::Frame;

/// Runtime value representation
///
/// Every value has exactly one owner. `Clone` is a deep copy: lists, strings,
/// symbols and errors are duplicated, a builtin is copied by identity, and a
/// lambda duplicates its formals, body and private bindings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Number(i64),
    /// Error carried as an ordinary value
    Error(Error),
    /// Symbol name, resolved through the environment when evaluated
    Symbol(String),
    /// String with escapes resolved
    String(String),
    /// S-expression, evaluated as an application
    SExpr(Vec<Value>),
    /// Q-expression, literal data that is never evaluated implicitly
    QExpr(Vec<Value>),
    /// Native or user-defined function
    Function(Function),
}

/// Callable values
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    /// Native operation, compared by identity
    Builtin(Builtin),
    /// User-defined function
    Lambda(Lambda),
}

/// User-defined function with its private environment
///
/// The private frame accumulates bindings across partial applications.
/// Its parent link is assigned to the calling environment when the last
/// formal is bound.
#[derive(Debug, Clone)]
pub struct Lambda {
    /// Formal parameters not yet bound, in order
    pub formals: Vec<String>,
    /// Body, evaluated as an S-expression
    pub body: Vec<Value>,
    /// Private environment
    pub env: Frame,
}

impl Lambda {
    /// Creates a lambda with an empty private environment
    pub fn new(formals: Vec<String>, body: Vec<Value>) -> Self {
        Lambda {
            formals,
            body,
            env: Frame::new(),
        }
    }
}

// The private environment does not take part in equality.
impl PartialEq for Lambda {
    fn eq(&self, other: &Self) -> bool {
        self.formals == other.formals && self.body == other.body
    }
}

impl Value {
    /// Creates a number value
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    /// Creates a symbol value
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Creates a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Creates an error value
    pub fn error(err: Error) -> Self {
        Value::Error(err)
    }

    /// Creates an S-expression from its cells
    pub fn sexpr(cells: Vec<Value>) -> Self {
        Value::SExpr(cells)
    }

    /// Creates a Q-expression from its cells
    pub fn qexpr(cells: Vec<Value>) -> Self {
        Value::QExpr(cells)
    }

    /// The empty S-expression `()`, returned by side-effecting builtins
    pub fn unit() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Creates a builtin function value
    pub fn builtin(builtin: Builtin) -> Self {
        Value::Function(Function::Builtin(builtin))
    }

    /// Creates a lambda with an empty private environment
    pub fn lambda(formals: Vec<String>, body: Vec<Value>) -> Self {
        Value::Function(Function::Lambda(Lambda::new(formals, body)))
    }

    /// Returns the type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::String(_) => "String",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Function(_) => "Function",
        }
    }

    /// Returns true for errors
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Returns the cells of an S- or Q-expression
    pub fn cells(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    fn cells_mut(&mut self, op: &str) -> Result<&mut Vec<Value>> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Ok(cells),
            other => Err(Error::type_mismatch(
                op,
                0,
                other.type_name(),
                "S-Expression or Q-Expression",
            )),
        }
    }

    /// Consumes a list and returns its cells
    pub fn into_cells(self) -> Option<Vec<Value>> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// Relabels an S-expression as a Q-expression; other values are unchanged
    pub fn into_qexpr(self) -> Self {
        match self {
            Value::SExpr(cells) => Value::QExpr(cells),
            other => other,
        }
    }

    /// Relabels a Q-expression as an S-expression; other values are unchanged
    pub fn into_sexpr(self) -> Self {
        match self {
            Value::QExpr(cells) => Value::SExpr(cells),
            other => other,
        }
    }

    /// Appends a value to the end of a list
    pub fn append(&mut self, value: Value) -> Result<()> {
        self.cells_mut("append")?.push(value);
        Ok(())
    }

    /// Removes the cell at `index`, shifting the rest left
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        let cells = self.cells_mut("remove")?;
        if index >= cells.len() {
            return Err(Error::EmptyListAccess {
                op: "remove".to_string(),
            });
        }
        Ok(cells.remove(index))
    }

    /// Removes the cell at `index` and drops the rest of the list
    pub fn take(mut self, index: usize) -> Result<Value> {
        self.remove(index)
    }

    /// Moves every cell of `other` onto the end of this list, in order
    pub fn join(&mut self, other: Value) -> Result<()> {
        let tail = match other {
            Value::SExpr(cells) | Value::QExpr(cells) => cells,
            other => {
                return Err(Error::type_mismatch(
                    "join",
                    1,
                    other.type_name(),
                    "S-Expression or Q-Expression",
                ))
            }
        };
        self.cells_mut("join")?.extend(tail);
        Ok(())
    }
}

impl From<Error> for Value {
    fn from(err: Error) -> Self {
        Value::Error(err)
    }
}

impl From<Result<Value>> for Value {
    fn from(result: Result<Value>) -> Self {
        result.unwrap_or_else(Value::Error)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(e) => write!(f, "Error: {}", e),
            Value::Symbol(s) => write!(f, "SYM: {}", s),
            Value::String(s) => write_escaped(f, s),
            Value::SExpr(cells) => write_cells(f, '(', cells, ')'),
            Value::QExpr(cells) => write_cells(f, '{', cells, '}'),
            Value::Function(func) => write!(f, "{}", func),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Function::Builtin(_) => write!(f, "<builtin>"),
            Function::Lambda(lambda) => {
                write!(f, "(\\ {{")?;
                for (i, formal) in lambda.formals.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "SYM: {}", formal)?;
                }
                write!(f, "}} ")?;
                write_cells(f, '{', &lambda.body, '}')?;
                write!(f, ")")
            }
        }
    }
}

fn write_cells(f: &mut fmt::Formatter, open: char, cells: &[Value], close: char) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", cell)?;
    }
    write!(f, "{}", close)
}

fn write_escaped(f: &mut fmt::Formatter, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            '\r' => write!(f, "\\r")?,
            '\0' => write!(f, "\\0")?,
            '\\' => write!(f, "\\\\")?,
            '"' => write!(f, "\\\"")?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "\"")
}
