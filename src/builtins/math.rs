//! Arithmetic builtins: `+ - * / %`
//!
//! Arithmetic wraps on overflow.

use super::number_arg;
use crate::error::{Error, Result};
use crate::runtime::Value;

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
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
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Rem => "%",
        }
    }

    fn apply(self, x: i64, y: i64) -> Result<i64> {
        match self {
            Op::Add => Ok(x.wrapping_add(y)),
            Op::Sub => Ok(x.wrapping_sub(y)),
            Op::Mul => Ok(x.wrapping_mul(y)),
            Op::Div | Op::Rem if y == 0 => Err(Error::DivideByZero),
            Op::Div => Ok(x.wrapping_div(y)),
            Op::Rem => Ok(x.wrapping_rem(y)),
        }
    }
}

/// Left fold of `op` over numeric arguments; `(- x)` negates
pub fn arithmetic(op: Op, args: Vec<Value>) -> Result<Value> {
    let name = op.symbol();
    let numbers = args
        .into_iter()
        .enumerate()
        .map(|(index, value)| number_arg(name, value, index))
        .collect::<Result<Vec<i64>>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(Error::arity(name, 0, 1));
    };
    if op == Op::Sub && rest.is_empty() {
        return Ok(Value::Number(first.wrapping_neg()));
    }

    rest.iter()
        .try_fold(first, |acc, &n| op.apply(acc, n))
        .map(Value::Number)
}
