//! In-memory console that records every line written to it.

use std::sync::{Arc, PoisonError, RwLock};

use crate::console::ports::{Console, ConsoleError, ConsoleResult};

/// Thread-safe console capturing output lines in write order.
///
/// Clones share the same buffer, so a test can hand one clone to the code
/// under test and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    lines: Arc<RwLock<Vec<String>>>,
}

impl RecordingConsole {
    /// Creates an empty recording console.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded lines.
    ///
    /// Lines recorded before a writer panicked are still returned.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Console for RecordingConsole {
    fn write_line(&self, line: &str) -> ConsoleResult<()> {
        let mut lines = self
            .lines
            .write()
            .map_err(|err| ConsoleError::io(std::io::Error::other(err.to_string())))?;
        lines.push(line.to_owned());
        Ok(())
    }
}
