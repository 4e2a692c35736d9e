//! In-memory repository for customer persistence tests.

use std::sync::{Arc, RwLock};

use crate::customer::{
    domain::CustomerRecord,
    ports::{CustomerRepository, RepositoryError, RepositoryResult},
};

/// Thread-safe in-memory customer repository.
///
/// Records are kept in save order. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    records: Arc<RwLock<Vec<CustomerRecord>>>,
}

impl InMemoryCustomerRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every saved record in save order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the lock is poisoned.
    pub fn records(&self) -> RepositoryResult<Vec<CustomerRecord>> {
        let records = self.records.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(records.clone())
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn save(&self, record: &CustomerRecord) -> RepositoryResult<()> {
        let mut records = self.records.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        records.push(record.clone());
        Ok(())
    }
}
