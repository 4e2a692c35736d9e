//! Adapter implementations for customer ports.

pub mod database;
pub mod email;
pub mod memory;

pub use database::{OracleCustomerRepository, SqlServerCustomerRepository};
pub use email::{NoopEmailSender, OutboxEmailSender};
pub use memory::InMemoryCustomerRepository;
