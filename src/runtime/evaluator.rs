use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::builtins::{self, lists};
use crate::error::{Error, Result};
use crate::reader;
use crate::runtime::environment::{EnvId, Environment};
use crate::runtime::print_handler::PrintHandler;
use crate::runtime::value::{Function, Lambda, Value};

/// Marker that collects the remaining arguments of a call
const REST_MARKER: &str = "&";

/// Where an evaluator sends `print` output and load diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Output {
    /// Write to stdout
    #[default]
    Stdout,
    /// Capture in memory, readable through [`Evaluator::output`]
    Capture,
    /// Discard
    Silent,
}

/// Evaluator configuration
#[derive(Debug, Clone, Default)]
pub struct EvaluatorConfig {
    /// Output destination
    pub output: Output,
}

/// Evaluator owning the session's environment arena
///
/// Builtins are registered in the global frame on construction.
/// - `eval` reduces S-expressions and resolves symbols
/// - `apply` calls builtins or binds lambda arguments, returning a
///   partially applied lambda when formals remain
/// - `load` evaluates a file form by form, reporting errors instead of
///   propagating them
pub struct Evaluator {
    /// Frame arena; `EnvId::ROOT` is the global frame
    pub env: Environment,
    /// Output destination for `print`
    printer: PrintHandler,
}

impl Evaluator {
    /// Creates an evaluator that prints to stdout
    pub fn new() -> Self {
        Self::with_config(EvaluatorConfig::default())
    }

    /// Creates an evaluator with custom configuration
    pub fn with_config(config: EvaluatorConfig) -> Self {
        let printer = match config.output {
            Output::Stdout => PrintHandler::Stdout,
            Output::Capture => PrintHandler::buffer(),
            Output::Silent => PrintHandler::Silent,
        };
        let mut env = Environment::new();
        builtins::register_all(&mut env);
        Evaluator { env, printer }
    }

    /// Output destination used by `print`
    pub fn printer(&self) -> &PrintHandler {
        &self.printer
    }

    /// Captured output (empty unless configured with [`Output::Capture`])
    pub fn output(&self) -> String {
        self.printer.get_output()
    }

    /// Looks a name up in the global frame
    pub fn lookup(&self, name: &str) -> Result<Value> {
        self.env.get(EnvId::ROOT, name)
    }

    /// Reads and evaluates every form of `source` in the global frame,
    /// returning the value of the last one (`()` for an empty program)
    pub fn run(&mut self, source: &str) -> Result<Value> {
        let results = self.run_each(source)?;
        Ok(results.into_iter().last().unwrap_or_else(Value::unit))
    }

    /// Reads and evaluates every form of `source`, returning each result
    pub fn run_each(&mut self, source: &str) -> Result<Vec<Value>> {
        let forms = reader::read_source(source)?;
        Ok(forms
            .into_iter()
            .map(|form| self.eval(EnvId::ROOT, form))
            .collect())
    }

    /// Evaluates a value in `env`
    pub fn eval(&mut self, env: EnvId, value: Value) -> Value {
        match value {
            Value::Symbol(name) => self.env.get(env, &name).into(),
            Value::SExpr(cells) => self.eval_sexpr(env, cells),
            other => other,
        }
    }

    fn eval_sexpr(&mut self, env: EnvId, cells: Vec<Value>) -> Value {
        let mut evaluated = Vec::with_capacity(cells.len());
        for cell in cells {
            let value = self.eval(env, cell);
            if value.is_error() {
                return value;
            }
            evaluated.push(value);
        }

        let mut evaluated = evaluated.into_iter();
        let first = match evaluated.next() {
            Some(first) => first,
            None => return Value::unit(),
        };
        if evaluated.len() == 0 {
            return self.eval(env, first);
        }

        match first {
            Value::Function(function) => self.apply(env, function, evaluated.collect()),
            other => Error::type_mismatch("apply", 0, other.type_name(), "Function").into(),
        }
    }

    /// Applies a function to already evaluated arguments
    pub fn apply(&mut self, env: EnvId, function: Function, args: Vec<Value>) -> Value {
        match function {
            Function::Builtin(builtin) => {
                trace!(builtin = builtin.name(), argc = args.len(), "apply builtin");
                builtin.call(self, env, args).into()
            }
            Function::Lambda(lambda) => {
                trace!(formals = lambda.formals.len(), argc = args.len(), "apply lambda");
                self.call_lambda(env, lambda, args).into()
            }
        }
    }

    fn call_lambda(&mut self, env: EnvId, mut lambda: Lambda, args: Vec<Value>) -> Result<Value> {
        let given = args.len();
        let total = lambda.formals.len();
        let mut formals = std::mem::take(&mut lambda.formals).into_iter();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let formal = formals.next().ok_or_else(|| Error::arity("lambda", given, total))?;

            if formal == REST_MARKER {
                let rest = single_rest_symbol(&mut formals)?;
                let collected = lists::list(std::iter::once(arg).chain(args).collect())?;
                lambda.env.put(&rest, collected);
                break;
            }

            lambda.env.put(&formal, arg);
        }

        let mut remaining: Vec<String> = formals.collect();
        if remaining.first().map(String::as_str) == Some(REST_MARKER) {
            let [_, rest] = remaining.as_slice() else {
                return Err(rest_format_error());
            };
            lambda.env.put(rest, Value::qexpr(Vec::new()));
            remaining.clear();
        }

        if !remaining.is_empty() {
            lambda.formals = remaining;
            return Ok(Value::Function(Function::Lambda(lambda)));
        }

        lambda.env.set_parent(Some(env));
        let Lambda { body, env: frame, .. } = lambda;
        let frame = self.env.enter(frame);
        let result = self.eval(frame, Value::SExpr(body));
        self.env.leave(frame);
        Ok(result)
    }

    /// Loads a file, evaluating each form in `env`
    ///
    /// Errors produced by individual forms are printed and evaluation
    /// continues. A file that cannot be read or parsed yields a single
    /// error value.
    pub fn load(&mut self, env: EnvId, path: &Path) -> Value {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                return Error::ParseFailure(format!(
                    "Could not load '{}': {}",
                    path.display(),
                    e
                ))
                .into()
            }
        };

        let forms = match reader::read_source(&source) {
            Ok(forms) => forms,
            Err(e) => return e.into_parse_failure().into(),
        };

        debug!(path = %path.display(), forms = forms.len(), "loading");
        for form in forms {
            let result = self.eval(env, form);
            if let Value::Error(ref err) = result {
                warn!(path = %path.display(), error = %err, "error while loading");
                self.printer.println(&result.to_string());
            }
        }

        Value::unit()
    }
}

/// After `&`, exactly one symbol must remain
fn single_rest_symbol(formals: &mut std::vec::IntoIter<String>) -> Result<String> {
    match (formals.next(), formals.len()) {
        (Some(rest), 0) => Ok(rest),
        _ => Err(rest_format_error()),
    }
}

fn rest_format_error() -> Error {
    Error::format(
        "lambda",
        "Symbol '&' not followed by single symbol.",
    )
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
