//! Logger adapters.

use std::sync::Arc;

use crate::{
    console::Console,
    order::ports::{LogResult, Logger},
};

/// Logger that stands in for a log file.
#[derive(Debug, Clone)]
pub struct FileLogger<C: Console> {
    console: Arc<C>,
}

impl<C: Console> FileLogger<C> {
    /// Creates a file logger reporting to the given console.
    #[must_use]
    pub const fn new(console: Arc<C>) -> Self {
        Self { console }
    }
}

impl<C: Console> Logger for FileLogger<C> {
    fn log(&self, message: &str) -> LogResult<()> {
        self.console
            .write_line(&format!("Logging to file: {message}"))?;
        Ok(())
    }
}

/// Logger writing straight to the console.
#[derive(Debug, Clone)]
pub struct ConsoleLogger<C: Console> {
    console: Arc<C>,
}

impl<C: Console> ConsoleLogger<C> {
    /// Creates a console logger.
    #[must_use]
    pub const fn new(console: Arc<C>) -> Self {
        Self { console }
    }
}

impl<C: Console> Logger for ConsoleLogger<C> {
    fn log(&self, message: &str) -> LogResult<()> {
        self.console
            .write_line(&format!("Logging to console: {message}"))?;
        Ok(())
    }
}
