//! Order processing and inventory.
//!
//! [`Inventory`](domain::Inventory) and [`Order`](domain::Order) each carry a
//! single concern. [`OrderProcessor`](services::OrderProcessor) processes
//! orders and reports through whichever [`Logger`](ports::Logger) it was
//! built with.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
