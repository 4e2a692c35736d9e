//! Console port definition.

use std::sync::Arc;
use thiserror::Error;

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Destination for human-readable output lines.
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send + Sync {
    /// Writes one line of output.
    ///
    /// The line must not contain the trailing newline; adapters add it.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] when the underlying sink rejects the
    /// write.
    fn write_line(&self, line: &str) -> ConsoleResult<()>;
}

/// Errors returned by console adapters.
#[derive(Debug, Clone, Error)]
pub enum ConsoleError {
    /// The output sink failed.
    #[error("console write failed: {0}")]
    Io(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConsoleError {
    /// Wraps a sink failure.
    pub fn io(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Io(Arc::new(err))
    }
}
