//! Print handler for configurable output.
//!
//! `print` and the error reports emitted while loading files go through a
//! [`PrintHandler`] so the destination can be chosen per evaluator:
//! - Stdout: the default for the binary
//! - Buffer: captured for assertions in tests
//! - Silent: discarded

use parking_lot::Mutex;

/// Print handler that captures output to a buffer.
#[derive(Debug, Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    /// Create a new buffer print handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Clear captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Output destination, dispatched by enum.
#[derive(Debug)]
pub enum PrintHandler {
    /// Writes to stdout (default).
    Stdout,
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandler {
    /// Create a capturing handler.
    pub fn buffer() -> Self {
        PrintHandler::Buffer(BufferPrintHandler::new())
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Get all captured output.
    ///
    /// Returns an empty string for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Clear captured output.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

impl Default for PrintHandler {
    fn default() -> Self {
        PrintHandler::Stdout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_captures_lines() {
        let handler = PrintHandler::buffer();
        handler.println("one");
        handler.println("two");
        assert_eq!(handler.get_output(), "one\ntwo\n");

        handler.clear();
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn test_silent_and_stdout_capture_nothing() {
        let silent = PrintHandler::Silent;
        silent.println("dropped");
        assert_eq!(silent.get_output(), "");
        assert_eq!(PrintHandler::default().get_output(), "");
    }
}
