//! Native functions registered in the global frame
//!
//! Every builtin is a variant of the closed [`Builtin`] enumeration. The
//! [`BUILTINS`] table maps source names to variants, and
//! [`Builtin::call`] dispatches to the handler. Handlers take ownership of
//! their argument list, check every precondition before touching it, and
//! report failures as `Err`, which the evaluator turns into an error value.

pub mod compare;
pub mod control;
pub mod definitions;
pub mod io;
pub mod lists;
pub mod math;

use crate::error::{Error, Result};
use crate::runtime::{EnvId, Environment, Evaluator, Value};

/// Identity of a native function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `list`
    List,
    /// `head`
    Head,
    /// `tail`
    Tail,
    /// `eval`
    Eval,
    /// `join`
    Join,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `\`
    Lambda,
    /// `def`
    Def,
    /// `=`
    Put,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `if`
    If,
    /// `print`
    Print,
    /// `error`
    Error,
    /// `load`
    Load,
}

/// Source names of every builtin, in registration order
pub const BUILTINS: &[(&str, Builtin)] = &[
    ("list", Builtin::List),
    ("head", Builtin::Head),
    ("tail", Builtin::Tail),
    ("eval", Builtin::Eval),
    ("join", Builtin::Join),
    ("+", Builtin::Add),
    ("-", Builtin::Sub),
    ("*", Builtin::Mul),
    ("/", Builtin::Div),
    ("%", Builtin::Rem),
    ("\\", Builtin::Lambda),
    ("def", Builtin::Def),
    ("=", Builtin::Put),
    (">", Builtin::Gt),
    ("<", Builtin::Lt),
    (">=", Builtin::Ge),
    ("<=", Builtin::Le),
    ("==", Builtin::Eq),
    ("!=", Builtin::Ne),
    ("if", Builtin::If),
    ("print", Builtin::Print),
    ("error", Builtin::Error),
    ("load", Builtin::Load),
];

impl Builtin {
    /// Source name
    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Rem => "%",
            Builtin::Lambda => "\\",
            Builtin::Def => "def",
            Builtin::Put => "=",
            Builtin::Gt => ">",
            Builtin::Lt => "<",
            Builtin::Ge => ">=",
            Builtin::Le => "<=",
            Builtin::Eq => "==",
            Builtin::Ne => "!=",
            Builtin::If => "if",
            Builtin::Print => "print",
            Builtin::Error => "error",
            Builtin::Load => "load",
        }
    }

    /// One-line description
    pub fn description(self) -> &'static str {
        match self {
            Builtin::List => "Turn the arguments into a Q-expression",
            Builtin::Head => "First element of a Q-expression",
            Builtin::Tail => "Q-expression without its first element",
            Builtin::Eval => "Evaluate a Q-expression as code",
            Builtin::Join => "Concatenate Q-expressions",
            Builtin::Add => "Sum",
            Builtin::Sub => "Difference, or negation with one argument",
            Builtin::Mul => "Product",
            Builtin::Div => "Integer quotient",
            Builtin::Rem => "Integer remainder",
            Builtin::Lambda => "Create a function from formals and a body",
            Builtin::Def => "Bind names in the global frame",
            Builtin::Put => "Bind names in the current frame",
            Builtin::Gt => "Greater than",
            Builtin::Lt => "Less than",
            Builtin::Ge => "Greater than or equal",
            Builtin::Le => "Less than or equal",
            Builtin::Eq => "Structural equality",
            Builtin::Ne => "Structural inequality",
            Builtin::If => "Evaluate one of two Q-expressions",
            Builtin::Print => "Print the arguments",
            Builtin::Error => "Create an error from a string",
            Builtin::Load => "Evaluate every form of a file",
        }
    }

    /// Calls the builtin with an owned argument list
    pub fn call(self, ev: &mut Evaluator, env: EnvId, args: Vec<Value>) -> Result<Value> {
        match self {
            Builtin::List => lists::list(args),
            Builtin::Head => lists::head(args),
            Builtin::Tail => lists::tail(args),
            Builtin::Eval => lists::eval(ev, env, args),
            Builtin::Join => lists::join(args),
            Builtin::Add => math::arithmetic(math::Op::Add, args),
            Builtin::Sub => math::arithmetic(math::Op::Sub, args),
            Builtin::Mul => math::arithmetic(math::Op::Mul, args),
            Builtin::Div => math::arithmetic(math::Op::Div, args),
            Builtin::Rem => math::arithmetic(math::Op::Rem, args),
            Builtin::Lambda => definitions::lambda(args),
            Builtin::Def => definitions::define(ev, env, args, definitions::Scope::Global),
            Builtin::Put => definitions::define(ev, env, args, definitions::Scope::Local),
            Builtin::Gt => compare::ordering(compare::Ordering::Gt, args),
            Builtin::Lt => compare::ordering(compare::Ordering::Lt, args),
            Builtin::Ge => compare::ordering(compare::Ordering::Ge, args),
            Builtin::Le => compare::ordering(compare::Ordering::Le, args),
            Builtin::Eq => compare::equality(true, args),
            Builtin::Ne => compare::equality(false, args),
            Builtin::If => control::if_(ev, env, args),
            Builtin::Print => io::print(ev, args),
            Builtin::Error => control::error(args),
            Builtin::Load => io::load(ev, env, args),
        }
    }
}

/// Binds every builtin in the global frame
pub fn register_all(env: &mut Environment) {
    for (name, builtin) in BUILTINS {
        env.put(EnvId::ROOT, name, Value::builtin(*builtin));
    }
}

/// Moves exactly `N` arguments out of the list
pub(crate) fn fixed_args<const N: usize>(op: &str, args: Vec<Value>) -> Result<[Value; N]> {
    let got = args.len();
    args.try_into().map_err(|_| Error::arity(op, got, N))
}

/// Checks the type of every argument
pub(crate) fn expect_all(op: &str, args: &[Value], expected: &'static str) -> Result<()> {
    match args.iter().enumerate().find(|(_, v)| v.type_name() != expected) {
        Some((index, value)) => Err(Error::type_mismatch(op, index, value.type_name(), expected)),
        None => Ok(()),
    }
}

/// Unwraps a Number argument
pub(crate) fn number_arg(op: &str, value: Value, index: usize) -> Result<i64> {
    match value {
        Value::Number(n) => Ok(n),
        other => Err(Error::type_mismatch(op, index, other.type_name(), "Number")),
    }
}

/// Unwraps a String argument
pub(crate) fn string_arg(op: &str, value: Value, index: usize) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(Error::type_mismatch(op, index, other.type_name(), "String")),
    }
}

/// Unwraps the cells of a Q-expression argument
pub(crate) fn qexpr_arg(op: &str, value: Value, index: usize) -> Result<Vec<Value>> {
    match value {
        Value::QExpr(cells) => Ok(cells),
        other => Err(Error::type_mismatch(op, index, other.type_name(), "Q-Expression")),
    }
}

/// Extracts symbol names from the cells of a Q-expression
pub(crate) fn symbol_names(op: &str, cells: &[Value]) -> Result<Vec<String>> {
    cells
        .iter()
        .map(|cell| match cell {
            Value::Symbol(name) => Ok(name.clone()),
            other => Err(Error::format(
                op,
                format!("Cannot define non-symbol. Got {}, Expected Symbol.", other.type_name()),
            )),
        })
        .collect()
}
