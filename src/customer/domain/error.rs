//! Error types for customer domain validation.

use thiserror::Error;

/// Errors returned while constructing customer domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CustomerDomainError {
    /// The customer name is empty after trimming.
    #[error("customer name must not be empty")]
    EmptyName,

    /// The email address is empty after trimming.
    #[error("email address must not be empty")]
    EmptyEmail,

    /// The email address is not of the form `local@domain`.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
