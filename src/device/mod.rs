//! Document-device scenario.
//!
//! Printing, scanning and faxing are three separate ports. A device
//! implements only the ones it supports, and each consumer asks for only
//! the port it uses:
//!
//! - Capability ports in [`ports`]
//! - Printer and scanner variants in [`adapters`]
//! - Queue and station consumers in [`services`]

pub mod adapters;
pub mod ports;
pub mod services;
