//! Service layer for customer persistence.
//!
//! Provides [`CustomerService`] which forwards records to whichever
//! repository it was built with.

use crate::customer::{
    domain::{Customer, CustomerRecord},
    ports::{CustomerRepository, RepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for customer persistence.
#[derive(Debug, Error)]
pub enum CustomerServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for customer service operations.
pub type CustomerServiceResult<T> = Result<T, CustomerServiceError>;

/// Customer persistence orchestration service.
#[derive(Debug, Clone)]
pub struct CustomerService<R>
where
    R: CustomerRepository,
{
    repository: Arc<R>,
}

impl<R> CustomerService<R>
where
    R: CustomerRepository,
{
    /// Creates a new customer service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Persists a customer record.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerServiceError::Repository`] when the repository
    /// rejects the record.
    pub fn save(&self, record: &CustomerRecord) -> CustomerServiceResult<()> {
        self.repository.save(record)?;
        tracing::info!(customer = record.name(), "customer record saved");
        Ok(())
    }

    /// Adds a customer by persisting its record form.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerServiceError::Repository`] when the repository
    /// rejects the record.
    pub fn add_customer(&self, customer: &Customer) -> CustomerServiceResult<()> {
        self.save(&CustomerRecord::from(customer))
    }
}
