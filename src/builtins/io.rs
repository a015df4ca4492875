//! Output and loading builtins: `print`, `load`

use std::path::Path;

use super::{fixed_args, string_arg};
use crate::error::Result;
use crate::runtime::{EnvId, Evaluator, Value};

/// `(print a b ...)` prints the canonical forms separated by spaces
pub fn print(ev: &mut Evaluator, args: Vec<Value>) -> Result<Value> {
    let line = args
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    ev.printer().println(&line);
    Ok(Value::unit())
}

/// `(load "path")`
pub fn load(ev: &mut Evaluator, env: EnvId, args: Vec<Value>) -> Result<Value> {
    let [path] = fixed_args("load", args)?;
    let path = string_arg("load", path, 0)?;
    Ok(ev.load(env, Path::new(&path)))
}
