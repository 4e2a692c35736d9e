//! Logging capability for order processing.

use crate::console::ConsoleError;
use thiserror::Error;

/// Result type for logger operations.
pub type LogResult<T> = Result<T, LogError>;

/// Destination for business log messages.
#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    /// Records one message.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] when the message cannot be recorded.
    fn log(&self, message: &str) -> LogResult<()>;
}

/// Errors returned by logger adapters.
#[derive(Debug, Clone, Error)]
pub enum LogError {
    /// The log line could not be written.
    #[error(transparent)]
    Console(#[from] ConsoleError),
}
