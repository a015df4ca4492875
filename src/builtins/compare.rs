//! Comparison builtins: `> < >= <= == !=`

use super::{fixed_args, number_arg};
use crate::error::Result;
use crate::runtime::Value;

/// Numeric comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
}

impl Ordering {
    fn symbol(self) -> &'static str {
        match self {
            Ordering::Gt => ">",
            Ordering::Lt => "<",
            Ordering::Ge => ">=",
            Ordering::Le => "<=",
        }
    }

    fn holds(self, x: i64, y: i64) -> bool {
        match self {
            Ordering::Gt => x > y,
            Ordering::Lt => x < y,
            Ordering::Ge => x >= y,
            Ordering::Le => x <= y,
        }
    }
}

/// `(> a b)` and friends, on two numbers
pub fn ordering(op: Ordering, args: Vec<Value>) -> Result<Value> {
    let name = op.symbol();
    let [x, y] = fixed_args(name, args)?;
    let x = number_arg(name, x, 0)?;
    let y = number_arg(name, y, 1)?;
    Ok(truth(op.holds(x, y)))
}

/// `(== a b)` when `equal`, `(!= a b)` otherwise; any two values
pub fn equality(equal: bool, args: Vec<Value>) -> Result<Value> {
    let name = if equal { "==" } else { "!=" };
    let [x, y] = fixed_args(name, args)?;
    Ok(truth((x == y) == equal))
}

fn truth(b: bool) -> Value {
    Value::Number(i64::from(b))
}
