//! Port contracts for customer persistence and notification.
//!
//! Ports define infrastructure-agnostic interfaces used by customer
//! services.

pub mod notification;
pub mod repository;

#[cfg(test)]
pub use notification::MockEmailSender;
pub use notification::{EmailSender, NotificationError, NotificationResult};
#[cfg(test)]
pub use repository::MockCustomerRepository;
pub use repository::{CustomerRepository, RepositoryError, RepositoryResult};
