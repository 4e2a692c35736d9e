//! Console adapter writing to process standard output.

use std::io::Write;

use crate::console::ports::{Console, ConsoleError, ConsoleResult};

/// Writes each line to standard output, holding the lock per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    /// Creates a standard output console.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) -> ConsoleResult<()> {
        let mut handle = std::io::stdout().lock();
        writeln!(handle, "{line}").map_err(ConsoleError::io)
    }
}
