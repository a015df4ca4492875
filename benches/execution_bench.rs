use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lispy::{Evaluator, EvaluatorConfig, Output, Scanner};

const PRELUDE: &str = r"
    (def {fib} (\ {n} {if (< n 2) {n} {+ (fib (- n 1)) (fib (- n 2))}}))
    (def {map} (\ {f l} {if (== l {}) {{}} {join (list (f (eval (head l)))) (map f (tail l))}}))
";

fn lexer_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize prelude", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(PRELUDE));
            scanner.scan_tokens().unwrap()
        })
    });
}

fn evaluator_benchmark(c: &mut Criterion) {
    let mut evaluator = Evaluator::with_config(EvaluatorConfig {
        output: Output::Silent,
    });
    evaluator.run(PRELUDE).unwrap();

    c.bench_function("fib 15", |b| {
        b.iter(|| evaluator.run(black_box("(fib 15)")).unwrap())
    });

    c.bench_function("map square over 20 items", |b| {
        b.iter(|| {
            evaluator
                .run(black_box(
                    r"(map (\ {x} {* x x}) {1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20})",
                ))
                .unwrap()
        })
    });
}

criterion_group!(benches, lexer_benchmark, evaluator_benchmark);
criterion_main!(benches);
