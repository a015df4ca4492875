//! Control builtins: `if`, `error`

use super::{fixed_args, number_arg, qexpr_arg, string_arg};
use crate::error::{Error, Result};
use crate::runtime::{EnvId, Evaluator, Value};

/// `(if cond {then} {else})` evaluates exactly one branch
pub fn if_(ev: &mut Evaluator, env: EnvId, args: Vec<Value>) -> Result<Value> {
    let [cond, then_branch, else_branch] = fixed_args("if", args)?;
    let cond = number_arg("if", cond, 0)?;
    let then_branch = qexpr_arg("if", then_branch, 1)?;
    let else_branch = qexpr_arg("if", else_branch, 2)?;

    let branch = if cond != 0 { then_branch } else { else_branch };
    Ok(ev.eval(env, Value::SExpr(branch)))
}

/// `(error "message")`
pub fn error(args: Vec<Value>) -> Result<Value> {
    let [message] = fixed_args("error", args)?;
    let message = string_arg("error", message, 0)?;
    Ok(Value::Error(Error::UserError(message)))
}
