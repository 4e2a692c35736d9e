//! Console adapter implementations.

mod memory;
mod stdout;

pub use memory::RecordingConsole;
pub use stdout::StdoutConsole;
