//! Concrete document devices.
//!
//! Devices announce each job on their console. The content itself goes to
//! the trace log only.

use std::sync::Arc;

use crate::{
    console::Console,
    device::ports::{DeviceResult, Fax, Printer, Scanner},
};

const PRINTING: &str = "Printing...";
const SCANNING: &str = "Scanning...";
const FAXING: &str = "Faxing...";

fn announce(console: &dyn Console, device: &str, status: &str, content: &str) -> DeviceResult<()> {
    tracing::debug!(device, bytes = content.len(), "{status}");
    console.write_line(status)?;
    Ok(())
}

/// Laser printer with a flatbed scanner.
#[derive(Debug, Clone)]
pub struct LaserJetPrinter<C: Console> {
    console: Arc<C>,
}

impl<C: Console> LaserJetPrinter<C> {
    /// Creates a laser printer reporting to the given console.
    #[must_use]
    pub const fn new(console: Arc<C>) -> Self {
        Self { console }
    }
}

impl<C: Console> Printer for LaserJetPrinter<C> {
    fn print(&self, content: &str) -> DeviceResult<()> {
        announce(&*self.console, "laserjet", PRINTING, content)
    }
}

impl<C: Console> Scanner for LaserJetPrinter<C> {
    fn scan(&self, content: &str) -> DeviceResult<()> {
        announce(&*self.console, "laserjet", SCANNING, content)
    }
}

/// Inkjet printer; prints and nothing else.
#[derive(Debug, Clone)]
pub struct InkjetPrinter<C: Console> {
    console: Arc<C>,
}

impl<C: Console> InkjetPrinter<C> {
    /// Creates an inkjet printer reporting to the given console.
    #[must_use]
    pub const fn new(console: Arc<C>) -> Self {
        Self { console }
    }
}

impl<C: Console> Printer for InkjetPrinter<C> {
    fn print(&self, content: &str) -> DeviceResult<()> {
        announce(&*self.console, "inkjet", PRINTING, content)
    }
}

/// Office multifunction device: prints, scans and faxes.
#[derive(Debug, Clone)]
pub struct MultifunctionCenter<C: Console> {
    console: Arc<C>,
}

impl<C: Console> MultifunctionCenter<C> {
    /// Creates a multifunction device reporting to the given console.
    #[must_use]
    pub const fn new(console: Arc<C>) -> Self {
        Self { console }
    }
}

impl<C: Console> Printer for MultifunctionCenter<C> {
    fn print(&self, content: &str) -> DeviceResult<()> {
        announce(&*self.console, "multifunction", PRINTING, content)
    }
}

impl<C: Console> Scanner for MultifunctionCenter<C> {
    fn scan(&self, content: &str) -> DeviceResult<()> {
        announce(&*self.console, "multifunction", SCANNING, content)
    }
}

impl<C: Console> Fax for MultifunctionCenter<C> {
    fn fax(&self, content: &str) -> DeviceResult<()> {
        announce(&*self.console, "multifunction", FAXING, content)
    }
}
