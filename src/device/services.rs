//! Consumers that each depend on a single device capability.

use std::sync::Arc;

use crate::device::ports::{DeviceResult, Printer, Scanner};

/// Sends a batch of documents to one printer.
#[derive(Debug, Clone)]
pub struct PrintQueue<P: Printer> {
    printer: Arc<P>,
}

impl<P: Printer> PrintQueue<P> {
    /// Creates a queue feeding the given printer.
    #[must_use]
    pub const fn new(printer: Arc<P>) -> Self {
        Self { printer }
    }

    /// Prints every document in order and returns how many were printed.
    ///
    /// Stops at the first failing document.
    ///
    /// # Errors
    ///
    /// Returns the printer's error for the first document it rejects.
    pub fn print_all<S: AsRef<str>>(&self, documents: &[S]) -> DeviceResult<usize> {
        for document in documents {
            self.printer.print(document.as_ref())?;
        }
        tracing::info!(documents = documents.len(), "print queue drained");
        Ok(documents.len())
    }
}

/// Feeds a batch of documents through one scanner.
#[derive(Debug, Clone)]
pub struct ScanStation<S: Scanner> {
    scanner: Arc<S>,
}

impl<S: Scanner> ScanStation<S> {
    /// Creates a station using the given scanner.
    #[must_use]
    pub const fn new(scanner: Arc<S>) -> Self {
        Self { scanner }
    }

    /// Scans every document in order and returns how many were scanned.
    ///
    /// # Errors
    ///
    /// Returns the scanner's error for the first document it rejects.
    pub fn scan_all<D: AsRef<str>>(&self, documents: &[D]) -> DeviceResult<usize> {
        for document in documents {
            self.scanner.scan(document.as_ref())?;
        }
        tracing::info!(documents = documents.len(), "scan batch complete");
        Ok(documents.len())
    }
}
