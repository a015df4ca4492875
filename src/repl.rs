//! Interactive read-eval-print loop
//!
//! Input is accumulated across lines until every group and string is
//! closed, so a definition can be typed over several lines.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::error::Error;
use crate::reader;
use crate::runtime::{EnvId, Evaluator, Value};

/// Prompt shown while a group is still open
const CONTINUATION_PROMPT: &str = "  ... ";

/// Line that ends the session
const EXIT_COMMAND: &str = "exit";

/// Interactive loop configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt for a fresh line
    pub prompt: String,
    /// Printed once at startup
    pub banner: String,
    /// Record entered lines in the editor history
    pub history: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: "lispy> ".to_string(),
            banner: "Welcome to Lispy. Enter something and press enter\nType 'exit' to quit"
                .to_string(),
            history: true,
        }
    }
}

/// Outcome of feeding one line to a [`Session`]
#[derive(Debug, Clone, PartialEq)]
pub enum Feed {
    /// A group is still open; more input is needed
    Incomplete,
    /// Every form was evaluated; one echo line per form
    Echo(Vec<String>),
}

/// Line accumulator in front of an evaluator
#[derive(Debug, Default)]
pub struct Session {
    pending: String,
}

impl Session {
    /// Creates an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an unclosed group is buffered
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drops buffered input
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// Adds a line and evaluates the buffer once it reads completely
    pub fn feed(&mut self, ev: &mut Evaluator, line: &str) -> Feed {
        if !self.pending.is_empty() {
            self.pending.push('\n');
        }
        self.pending.push_str(line);

        let forms = match reader::read_source(&self.pending) {
            Ok(forms) => forms,
            Err(Error::UnexpectedEof { .. } | Error::UnterminatedString { .. }) => {
                return Feed::Incomplete
            }
            Err(e) => {
                self.pending.clear();
                return Feed::Echo(vec![Value::Error(e.into_parse_failure()).to_string()]);
            }
        };
        self.pending.clear();

        Feed::Echo(
            forms
                .into_iter()
                .map(|form| ev.eval(EnvId::ROOT, form).to_string())
                .collect(),
        )
    }
}

/// Runs the interactive loop until `exit`, Ctrl-D or end of input
pub fn run(ev: &mut Evaluator, config: &ReplConfig) -> anyhow::Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut session = Session::new();

    println!("{}", config.banner);

    loop {
        let prompt = if session.is_pending() {
            CONTINUATION_PROMPT
        } else {
            config.prompt.as_str()
        };

        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                session.reset();
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        if config.history && !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }

        if !session.is_pending() && line.trim() == EXIT_COMMAND {
            break;
        }

        if let Feed::Echo(lines) = session.feed(ev, &line) {
            for out in lines {
                println!("{}", out);
            }
        }
    }

    debug!("interactive session finished");
    Ok(())
}
