//! Shared world state for customer persistence BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use solid_tour::customer::{
    adapters::{InMemoryCustomerRepository, OracleCustomerRepository, SqlServerCustomerRepository},
    domain::CustomerRecord,
    services::{CustomerService, CustomerServiceError},
};

/// A customer service wired to one of the available repositories.
///
/// Each variant keeps the concrete service type so steps can drive it
/// without boxing the repository.
pub enum WiredService {
    /// Backed by the SQL Server stub.
    SqlServer(CustomerService<SqlServerCustomerRepository>),
    /// Backed by the Oracle stub.
    Oracle(CustomerService<OracleCustomerRepository>),
    /// Backed by the in-memory repository.
    Memory(CustomerService<InMemoryCustomerRepository>),
}

impl WiredService {
    /// Saves a record through whichever repository is wired in.
    ///
    /// # Errors
    ///
    /// Returns the service error from the wired repository.
    pub fn save(&self, record: &CustomerRecord) -> Result<(), CustomerServiceError> {
        match self {
            Self::SqlServer(service) => service.save(record),
            Self::Oracle(service) => service.save(record),
            Self::Memory(service) => service.save(record),
        }
    }
}

/// Scenario world for customer persistence behaviour tests.
#[derive(Default)]
pub struct CustomerWorld {
    /// The service under test, once wired.
    pub service: Option<WiredService>,
    /// Shared handle on the in-memory repository, when that one is wired.
    pub memory: Option<InMemoryCustomerRepository>,
    /// Result of the last save attempt.
    pub last_save_result: Option<Result<(), CustomerServiceError>>,
}

impl CustomerWorld {
    /// Wires the service to the repository named `backend`.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown backend names.
    pub fn wire(&mut self, backend: &str) -> Result<(), eyre::Report> {
        let service = match backend {
            "sqlserver" => WiredService::SqlServer(CustomerService::new(Arc::new(
                SqlServerCustomerRepository::new(),
            ))),
            "oracle" => WiredService::Oracle(CustomerService::new(Arc::new(
                OracleCustomerRepository::new(),
            ))),
            "memory" => {
                let repository = InMemoryCustomerRepository::new();
                self.memory = Some(repository.clone());
                WiredService::Memory(CustomerService::new(Arc::new(repository)))
            }
            other => return Err(eyre::eyre!("unknown repository backend '{other}'")),
        };
        self.service = Some(service);
        Ok(())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CustomerWorld {
    CustomerWorld::default()
}
