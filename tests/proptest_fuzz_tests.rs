//! Property-based fuzzing tests for the scanner, parser and evaluator
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Scanning and parsing never panic on arbitrary input
//! 2. Evaluation turns every failure into an error value
//! 3. The arithmetic and list builtins obey their algebraic laws

use lispy::lexer::SExprScanner;
use lispy::parser::SExprParser;
use lispy::{Error, Evaluator, EvaluatorConfig, Output, Value};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break the scanner
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,300}").unwrap()
}

/// Generate token soup that looks like source text
fn sexp_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(sexp_token(), 0..40).prop_map(|tokens| tokens.join(" "))
}

fn sexp_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        // Builtins
        Just("head".to_string()),
        Just("tail".to_string()),
        Just("join".to_string()),
        Just("eval".to_string()),
        Just("list".to_string()),
        Just("def".to_string()),
        Just("\\".to_string()),
        Just("if".to_string()),
        Just("&".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("/".to_string()),
        Just("%".to_string()),
        Just("==".to_string()),
        // Numbers
        (-1000i64..1000i64).prop_map(|n| n.to_string()),
        // Strings
        r#""[a-zA-Z0-9 ]{0,10}""#,
        // Identifiers
        "[a-z][a-z0-9_]{0,6}",
        // Comments
        ";[^\n]{0,20}\n",
    ]
}

/// A Q-expression literal of small numbers
fn number_list() -> impl Strategy<Value = (Vec<i64>, String)> {
    prop::collection::vec(-50i64..50, 0..8).prop_map(|ns| {
        let text: Vec<String> = ns.iter().map(|n| n.to_string()).collect();
        let literal = format!("{{{}}}", text.join(" "));
        (ns, literal)
    })
}

fn silent() -> Evaluator {
    Evaluator::with_config(EvaluatorConfig {
        output: Output::Silent,
    })
}

fn eval_one(source: &str) -> Value {
    silent().run(source).unwrap()
}

// =============================================================================
// SCANNER / PARSER FUZZ TESTS
// =============================================================================

proptest! {
    /// The scanner should never panic on arbitrary input
    #[test]
    fn scanner_never_panics(source in arbitrary_source_string()) {
        let mut scanner = SExprScanner::new(&source);
        let _ = scanner.scan_tokens();
    }

    /// The parser should never panic on any token stream the scanner accepts
    #[test]
    fn parser_never_panics(source in sexp_like_string()) {
        let mut scanner = SExprScanner::new(&source);
        if let Ok(tokens) = scanner.scan_tokens() {
            let mut parser = SExprParser::new(tokens);
            let _ = parser.parse();
        }
    }

    /// Unbalanced groups are rejected, balanced ones accepted
    #[test]
    fn parser_balance(opens in 0usize..40, closes in 0usize..40) {
        let source = format!("{}1{}", "(".repeat(opens), ")".repeat(closes));
        let tokens = SExprScanner::new(&source).scan_tokens().unwrap();
        let parsed = SExprParser::new(tokens).parse();
        prop_assert_eq!(parsed.is_ok(), opens == closes);
    }
}

// =============================================================================
// EVALUATOR FUZZ TESTS
// =============================================================================

proptest! {
    /// Evaluating token soup never panics and is deterministic
    #[test]
    fn evaluator_is_deterministic(source in sexp_like_string()) {
        let first = silent().run(&source);
        let second = silent().run(&source);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn addition_commutes(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(
            eval_one(&format!("(+ {} {})", a, b)),
            eval_one(&format!("(+ {} {})", b, a))
        );
    }

    #[test]
    fn unary_minus_negates(a in any::<i64>()) {
        prop_assert_eq!(
            eval_one(&format!("(- {})", a)),
            Value::Number(a.wrapping_neg())
        );
    }

    #[test]
    fn division_by_zero_is_an_error(a in any::<i64>()) {
        prop_assert_eq!(
            eval_one(&format!("(/ {} 0)", a)),
            Value::Error(Error::DivideByZero)
        );
        prop_assert_eq!(
            eval_one(&format!("(% {} 0)", a)),
            Value::Error(Error::DivideByZero)
        );
    }

    #[test]
    fn quotient_and_remainder_recompose(a in -10_000i64..10_000, b in 1i64..100) {
        let source = format!("(+ (* (/ {a} {b}) {b}) (% {a} {b}))", a = a, b = b);
        prop_assert_eq!(eval_one(&source), Value::Number(a));
    }

    #[test]
    fn join_is_associative(
        (x, xs) in number_list(),
        (y, ys) in number_list(),
        (z, zs) in number_list()
    ) {
        let left = eval_one(&format!("(join (join {} {}) {})", xs, ys, zs));
        let right = eval_one(&format!("(join {} (join {} {}))", xs, ys, zs));
        prop_assert_eq!(&left, &right);

        let expected: Vec<Value> = x.iter().chain(&y).chain(&z).copied().map(Value::Number).collect();
        prop_assert_eq!(left, Value::qexpr(expected));
    }

    #[test]
    fn empty_list_is_left_identity((_, xs) in number_list()) {
        prop_assert_eq!(
            eval_one(&format!("(join {{}} {})", xs)),
            eval_one(&xs)
        );
    }

    #[test]
    fn head_and_tail_rebuild_list((ns, xs) in number_list()) {
        prop_assume!(!ns.is_empty());
        prop_assert_eq!(
            eval_one(&format!("(join (head {0}) (tail {0}))", xs)),
            eval_one(&xs)
        );
    }

    #[test]
    fn equality_is_reflexive((_, xs) in number_list()) {
        prop_assert_eq!(eval_one(&format!("(== {0} {0})", xs)), Value::Number(1));
        prop_assert_eq!(eval_one(&format!("(!= {0} {0})", xs)), Value::Number(0));
    }
}
