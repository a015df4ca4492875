use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use lispy::builtins::BUILTINS;
use lispy::repl::{self, ReplConfig};
use lispy::{EnvId, Evaluator, Value};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }
    if let Some(flag) = args.iter().find(|a| a.starts_with('-')) {
        eprintln!("Unknown option '{}'", flag);
        print_usage();
        process::exit(2);
    }

    let mut evaluator = Evaluator::new();

    if args.is_empty() {
        return repl::run(&mut evaluator, &ReplConfig::default());
    }

    for path in args.iter().map(PathBuf::from) {
        info!(path = %path.display(), "loading file");
        if let Value::Error(err) = evaluator.load(EnvId::ROOT, &path) {
            println!("{}", Value::Error(err));
        }
    }
    Ok(())
}

/// Installs a stderr subscriber when `RUST_LOG` is set
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn print_usage() {
    println!("lispy {}", lispy::VERSION);
    println!();
    println!("Usage: lispy [FILE...]");
    println!();
    println!("Evaluates each FILE in order. Without files, starts an interactive session.");
    println!();
    println!("Options:");
    println!("  -h, --help    Print this help");
    println!();
    println!("Builtins:");
    for (name, builtin) in BUILTINS {
        println!("  {:<8}{}", name, builtin.description());
    }
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=lispy=debug) to enable diagnostics on stderr.");
}
