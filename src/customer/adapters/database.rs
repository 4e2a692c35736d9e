//! Database repository stubs.
//!
//! These stand in for real drivers. They render the record to the JSON row
//! a driver would receive, trace it, and report success.

use crate::customer::{
    domain::CustomerRecord,
    ports::{CustomerRepository, RepositoryError, RepositoryResult},
};

fn render_row(record: &CustomerRecord) -> RepositoryResult<String> {
    serde_json::to_string(record).map_err(RepositoryError::persistence)
}

/// SQL Server repository stub.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlServerCustomerRepository;

impl SqlServerCustomerRepository {
    /// Creates the stub.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CustomerRepository for SqlServerCustomerRepository {
    fn save(&self, record: &CustomerRecord) -> RepositoryResult<()> {
        let row = render_row(record)?;
        tracing::debug!(backend = "sqlserver", %row, "customer row accepted");
        Ok(())
    }
}

/// Oracle repository stub.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleCustomerRepository;

impl OracleCustomerRepository {
    /// Creates the stub.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CustomerRepository for OracleCustomerRepository {
    fn save(&self, record: &CustomerRecord) -> RepositoryResult<()> {
        let row = render_row(record)?;
        tracing::debug!(backend = "oracle", %row, "customer row accepted");
        Ok(())
    }
}
