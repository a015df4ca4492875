//! Tests for partial application and call-site environments

use lispy::{EnvId, Evaluator, Function, Value};

fn evaluator_with(source: &str) -> Evaluator {
    let mut evaluator = Evaluator::new();
    evaluator.run(source).unwrap();
    evaluator
}

#[test]
fn test_partial_application_adds() {
    let mut ev = evaluator_with(r"(def {add5} (\ {x y} {+ x y}))");
    assert_eq!(ev.run("((add5 5) 3)").unwrap(), Value::Number(8));
    assert_eq!(ev.run("(add5 5 3)").unwrap(), Value::Number(8));
}

#[test]
fn test_partial_application_returns_function() {
    let mut ev = evaluator_with(r"(def {add5} (\ {x y} {+ x y}))");
    let partial = ev.run("(add5 5)").unwrap();
    assert_eq!(partial.to_string(), r"(\ {SYM: y} {SYM: + SYM: x SYM: y})");

    match partial {
        Value::Function(Function::Lambda(lambda)) => {
            assert_eq!(lambda.formals, vec!["y".to_string()]);
            assert_eq!(lambda.env.lookup("x"), Some(&Value::Number(5)));
        }
        other => panic!("expected lambda, got {}", other),
    }
}

#[test]
fn test_partial_application_bound_by_name() {
    let mut ev = evaluator_with(
        r"
        (def {add3} (\ {a b c} {+ a b c}))
        (def {plus1} (add3 1))
        (def {plus3} (plus1 2))
        ",
    );
    assert_eq!(ev.run("(plus3 10)").unwrap(), Value::Number(13));
    // Reusing the partial does not leak bindings between calls
    assert_eq!(ev.run("(plus3 20)").unwrap(), Value::Number(23));
    assert_eq!(ev.run("(plus1 0 0)").unwrap(), Value::Number(1));
}

#[test]
fn test_curry_and_uncurry() {
    let mut ev = evaluator_with(
        r"
        (def {unpack} (\ {f l} {eval (join (list f) l)}))
        (def {pack} (\ {f & xs} {f xs}))
        ",
    );
    assert_eq!(ev.run("(unpack + {1 2 3})").unwrap(), Value::Number(6));
    assert_eq!(
        ev.run("(pack head 5 6 7)").unwrap(),
        Value::qexpr(vec![Value::Number(5)])
    );
}

#[test]
fn test_body_sees_calling_environment() {
    let mut ev = evaluator_with(
        r"
        (def {show-n} (\ {_} {n}))
        (def {with-n} (\ {n} {show-n 0}))
        ",
    );
    assert_eq!(ev.run("(with-n 42)").unwrap(), Value::Number(42));
}

#[test]
fn test_partial_bindings_shadow_call_site() {
    let mut ev = evaluator_with(
        r"
        (def {x} 100)
        (def {pair} (\ {x y} {list x y}))
        (def {first-is-1} (pair 1))
        ",
    );
    assert_eq!(
        ev.run("(first-is-1 2)").unwrap(),
        Value::qexpr(vec![Value::Number(1), Value::Number(2)])
    );
}

#[test]
fn test_frames_are_released() {
    let mut ev = evaluator_with(
        r"
        (def {fib} (\ {n} {if (< n 2) {n} {+ (fib (- n 1)) (fib (- n 2))}}))
        ",
    );
    let before = ev.env.live_frames();
    assert_eq!(ev.run("(fib 15)").unwrap(), Value::Number(610));
    assert_eq!(ev.env.live_frames(), before);
    assert_eq!(ev.env.depth(EnvId::ROOT), 1);
}
