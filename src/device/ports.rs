//! Segregated document-device capabilities.

use crate::console::ConsoleError;
use thiserror::Error;

/// Result type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Prints documents.
#[cfg_attr(test, mockall::automock)]
pub trait Printer: Send + Sync {
    /// Prints the given content.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] when the device cannot report the job.
    fn print(&self, content: &str) -> DeviceResult<()>;
}

/// Scans documents.
#[cfg_attr(test, mockall::automock)]
pub trait Scanner: Send + Sync {
    /// Scans the given content.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] when the device cannot report the job.
    fn scan(&self, content: &str) -> DeviceResult<()>;
}

/// Sends documents by fax.
pub trait Fax: Send + Sync {
    /// Faxes the given content.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError`] when the device cannot report the job.
    fn fax(&self, content: &str) -> DeviceResult<()>;
}

/// Errors returned by device adapters.
#[derive(Debug, Clone, Error)]
pub enum DeviceError {
    /// The device status line could not be written.
    #[error(transparent)]
    Console(#[from] ConsoleError),
}
