//! Line-oriented output capability shared by every scenario.
//!
//! Every "print" in the tour goes through the [`ports::Console`] port so
//! consumers never write to a process stream directly. Two adapters are
//! provided:
//!
//! - [`adapters::StdoutConsole`] for the binary
//! - [`adapters::RecordingConsole`] for tests and inspection

pub mod adapters;
pub mod ports;

pub use adapters::{RecordingConsole, StdoutConsole};
pub use ports::{Console, ConsoleError, ConsoleResult};
