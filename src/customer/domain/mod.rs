//! Domain model for customers.
//!
//! [`CustomerRecord`] is the full registration sheet that gets persisted;
//! [`Customer`] is the validated entity used when registering someone new.

mod customer;
mod email;
mod error;
mod record;

pub use customer::Customer;
pub use email::{EmailAddress, OutgoingEmail};
pub use error::CustomerDomainError;
pub use record::CustomerRecord;
