//! Customer persistence and registration.
//!
//! High-level services here depend only on abstractions: a
//! [`CustomerRepository`](ports::CustomerRepository) for storage and an
//! [`EmailSender`](ports::EmailSender) for notifications. The database and
//! mail transports are stubs; real drivers would be further adapters.
//!
//! - Domain records in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
