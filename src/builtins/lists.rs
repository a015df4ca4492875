//! List builtins: `list`, `head`, `tail`, `eval`, `join`

use super::{expect_all, fixed_args, qexpr_arg};
use crate::error::{Error, Result};
use crate::runtime::{EnvId, Evaluator, Value};

/// `(list a b ...)` -> `{a b ...}`
pub fn list(args: Vec<Value>) -> Result<Value> {
    let mut list = Value::qexpr(Vec::with_capacity(args.len()));
    for arg in args {
        list.append(arg)?;
    }
    Ok(list)
}

/// `(head {a b ...})` -> `{a}`
pub fn head(args: Vec<Value>) -> Result<Value> {
    let list = single_non_empty("head", args)?;
    Ok(Value::qexpr(vec![list.take(0)?]))
}

/// `(tail {a b ...})` -> `{b ...}`
pub fn tail(args: Vec<Value>) -> Result<Value> {
    let mut list = single_non_empty("tail", args)?;
    list.remove(0)?;
    Ok(list)
}

/// `(eval {f x ...})` evaluates the Q-expression as an S-expression
pub fn eval(ev: &mut Evaluator, env: EnvId, args: Vec<Value>) -> Result<Value> {
    let [code] = fixed_args("eval", args)?;
    let cells = qexpr_arg("eval", code, 0)?;
    Ok(ev.eval(env, Value::SExpr(cells)))
}

/// `(join {a} {b c} ...)` -> `{a b c ...}`
pub fn join(args: Vec<Value>) -> Result<Value> {
    expect_all("join", &args, "Q-Expression")?;

    let mut args = args.into_iter();
    let Some(mut joined) = args.next() else {
        return Err(Error::arity("join", 0, 1));
    };
    for next in args {
        joined.join(next)?;
    }
    Ok(joined)
}

/// The single non-empty Q-expression argument of `head`/`tail`
fn single_non_empty(op: &str, args: Vec<Value>) -> Result<Value> {
    let [list] = fixed_args(op, args)?;
    let cells = qexpr_arg(op, list, 0)?;
    if cells.is_empty() {
        return Err(Error::EmptyListAccess { op: op.to_string() });
    }
    Ok(Value::QExpr(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn q(ns: &[i64]) -> Value {
        Value::qexpr(ns.iter().copied().map(Value::Number).collect())
    }

    #[test]
    fn test_list_relabels() {
        assert_eq!(
            list(vec![Value::Number(1), Value::symbol("x")]).unwrap(),
            Value::qexpr(vec![Value::Number(1), Value::symbol("x")])
        );
        assert_eq!(list(vec![]).unwrap(), q(&[]));
    }

    #[test]
    fn test_head_and_tail() {
        assert_eq!(head(vec![q(&[1, 2, 3])]).unwrap(), q(&[1]));
        assert_eq!(tail(vec![q(&[1, 2, 3])]).unwrap(), q(&[2, 3]));
        assert_eq!(tail(vec![q(&[1])]).unwrap(), q(&[]));
    }

    #[test]
    fn test_head_and_tail_reject() {
        assert_eq!(
            head(vec![q(&[])]).unwrap_err().kind(),
            ErrorKind::EmptyListAccess
        );
        assert_eq!(
            tail(vec![q(&[])]).unwrap_err().kind(),
            ErrorKind::EmptyListAccess
        );
        assert_eq!(
            head(vec![Value::Number(1)]).unwrap_err(),
            Error::type_mismatch("head", 0, "Number", "Q-Expression")
        );
        assert_eq!(
            tail(vec![q(&[1]), q(&[2])]).unwrap_err(),
            Error::arity("tail", 2, 1)
        );
    }

    #[test]
    fn test_join() {
        assert_eq!(
            join(vec![q(&[1, 2]), q(&[3]), q(&[]), q(&[4])]).unwrap(),
            q(&[1, 2, 3, 4])
        );
        assert_eq!(
            join(vec![q(&[1]), Value::Number(2)]).unwrap_err(),
            Error::type_mismatch("join", 1, "Number", "Q-Expression")
        );
        assert!(join(vec![]).is_err());
    }

    #[test]
    fn test_eval_builtin() {
        let mut ev = Evaluator::new();
        let code = Value::qexpr(vec![Value::symbol("+"), Value::Number(1), Value::Number(2)]);
        assert_eq!(eval(&mut ev, EnvId::ROOT, vec![code]).unwrap(), Value::Number(3));
        assert!(eval(&mut ev, EnvId::ROOT, vec![Value::Number(1)]).is_err());
    }

    #[test]
    fn test_s_expression_is_not_a_list_argument() {
        let mut ev = Evaluator::new();
        assert_eq!(
            eval(&mut ev, EnvId::ROOT, vec![Value::unit()]).unwrap_err(),
            Error::type_mismatch("eval", 0, "S-Expression", "Q-Expression")
        );
        assert_eq!(
            head(vec![Value::sexpr(vec![Value::Number(1)])]).unwrap_err(),
            Error::type_mismatch("head", 0, "S-Expression", "Q-Expression")
        );
    }
}
