//! Binding builtins: `\`, `def`, `=`

use tracing::debug;

use super::{fixed_args, qexpr_arg, symbol_names};
use crate::error::{Error, Result};
use crate::runtime::{EnvId, Evaluator, Value};

/// Frame a definition binds into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Outermost frame of the chain (`def`)
    Global,
    /// Innermost frame (`=`)
    Local,
}

/// `(\ {formals} {body})` -> lambda
pub fn lambda(args: Vec<Value>) -> Result<Value> {
    let [formals, body] = fixed_args("\\", args)?;
    let formals = qexpr_arg("\\", formals, 0)?;
    let body = qexpr_arg("\\", body, 1)?;
    let formals = symbol_names("\\", &formals)?;

    Ok(Value::lambda(formals, body))
}

/// `(def {a b} 1 2)` / `(= {a b} 1 2)`
pub fn define(ev: &mut Evaluator, env: EnvId, args: Vec<Value>, scope: Scope) -> Result<Value> {
    let op = match scope {
        Scope::Global => "def",
        Scope::Local => "=",
    };
    let mut args = args.into_iter();
    let Some(names) = args.next() else {
        return Err(Error::arity(op, 0, 1));
    };
    let names = symbol_names(op, &qexpr_arg(op, names, 0)?)?;
    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(Error::arity(op, values.len(), names.len()));
    }

    for (name, value) in names.iter().zip(values) {
        debug!(name = %name, ?scope, "define");
        match scope {
            Scope::Global => ev.env.define_global(env, name, value),
            Scope::Local => ev.env.put(env, name, value),
        }
    }
    Ok(Value::unit())
}
