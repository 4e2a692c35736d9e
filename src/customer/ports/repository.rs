//! Repository port for customer record persistence.

use crate::customer::domain::CustomerRecord;
use std::sync::Arc;
use thiserror::Error;

/// Result type for customer repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Customer persistence contract.
///
/// Implementations must accept every well-formed record. Saving the same
/// record twice is not an error.
#[cfg_attr(test, mockall::automock)]
pub trait CustomerRepository: Send + Sync {
    /// Stores a customer record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when the backing store
    /// fails.
    fn save(&self, record: &CustomerRecord) -> RepositoryResult<()>;
}

/// Errors returned by customer repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
