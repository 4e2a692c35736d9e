//! Email address and outgoing message types.

use super::CustomerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, lowercased email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// The input is trimmed and lowercased. It must contain exactly one `@`
    /// with a non-empty part on each side and no whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerDomainError::EmptyEmail`] when the value is empty
    /// after trimming, or [`CustomerDomainError::InvalidEmail`] when it is
    /// not of the form `local@domain`.
    pub fn new(value: impl Into<String>) -> Result<Self, CustomerDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(CustomerDomainError::EmptyEmail);
        }

        let is_valid = match normalized.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !normalized.chars().any(char::is_whitespace)
            }
            None => false,
        };

        if !is_valid {
            return Err(CustomerDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A message handed to an [`EmailSender`](crate::customer::ports::EmailSender).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    to: EmailAddress,
    subject: String,
    body: String,
}

impl OutgoingEmail {
    /// Creates an outgoing message.
    #[must_use]
    pub fn new(to: EmailAddress, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to,
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Returns the destination address.
    #[must_use]
    pub const fn to(&self) -> &EmailAddress {
        &self.to
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
