//! Runtime execution: values, the environment arena and the evaluator

mod environment;
mod evaluator;
mod print_handler;
mod value;

pub use environment::{EnvId, Environment, Frame};
pub use evaluator::{Evaluator, EvaluatorConfig, Output};
pub use print_handler::{BufferPrintHandler, PrintHandler};
pub use value::{Function, Lambda, Value};
