//! Validated customer entity.

use super::{CustomerDomainError, EmailAddress};
use serde::{Deserialize, Serialize};

/// A customer with a name and a reachable email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    email: EmailAddress,
}

impl Customer {
    /// Creates a customer.
    ///
    /// The name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerDomainError::EmptyName`] when the name is blank, or
    /// the [`EmailAddress::new`] error when the email is not valid.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, CustomerDomainError> {
        let raw_name = name.into();
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(CustomerDomainError::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_owned(),
            email: EmailAddress::new(email)?,
        })
    }

    /// Returns the customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the customer email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }
}
