//! Service layer for customer registration.
//!
//! Registration validates the applicant and sends one welcome email
//! through the injected [`EmailSender`].

use crate::customer::{
    domain::{Customer, CustomerDomainError, OutgoingEmail},
    ports::{EmailSender, NotificationError},
};
use std::sync::Arc;
use thiserror::Error;

/// Subject line of the welcome email.
pub const WELCOME_SUBJECT: &str = "Welcome";

/// Request payload for registering a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCustomerRequest {
    name: String,
    email: String,
}

impl RegisterCustomerRequest {
    /// Creates a request from raw form input.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Service-level errors for customer registration.
#[derive(Debug, Error)]
pub enum RegistrationServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CustomerDomainError),
    /// The welcome email could not be sent.
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

/// Result type for registration service operations.
pub type RegistrationServiceResult<T> = Result<T, RegistrationServiceError>;

/// Customer registration orchestration service.
#[derive(Debug, Clone)]
pub struct CustomerRegistration<S>
where
    S: EmailSender,
{
    sender: Arc<S>,
}

impl<S> CustomerRegistration<S>
where
    S: EmailSender,
{
    /// Creates a new registration service.
    #[must_use]
    pub const fn new(sender: Arc<S>) -> Self {
        Self { sender }
    }

    /// Registers a customer and sends the welcome email.
    ///
    /// No email is sent when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationServiceError::Domain`] when the request is
    /// invalid, or [`RegistrationServiceError::Notification`] when the
    /// sender rejects the welcome email.
    pub fn register_customer(
        &self,
        request: RegisterCustomerRequest,
    ) -> RegistrationServiceResult<Customer> {
        let RegisterCustomerRequest { name, email } = request;
        let customer = Customer::new(name, email)?;

        let welcome = OutgoingEmail::new(
            customer.email().clone(),
            WELCOME_SUBJECT,
            format!("Hello {}, thanks for registering.", customer.name()),
        );
        self.sender.send_email(&welcome)?;

        tracing::info!(customer = customer.name(), "customer registered");
        Ok(customer)
    }
}
