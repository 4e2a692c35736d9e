//! Example runner that walks through every scenario once.
//!
//! The tour wires concrete variants into their consumers and writes the
//! results to a [`Console`]. It is the only place that picks concrete
//! types; the scenario modules never do.

use std::sync::Arc;

use crate::{
    animal::{
        domain::{Cat, Dog},
        ports::Animal,
        services::AnimalSound,
    },
    console::{Console, ConsoleError},
    customer::{
        adapters::{NoopEmailSender, OracleCustomerRepository, SqlServerCustomerRepository},
        domain::CustomerRecord,
        ports::CustomerRepository,
        services::{
            CustomerRegistration, CustomerService, CustomerServiceError, RegisterCustomerRequest,
            RegistrationServiceError,
        },
    },
    device::{
        adapters::{InkjetPrinter, LaserJetPrinter},
        ports::{DeviceError, Printer, Scanner},
    },
    order::{
        adapters::ConsoleLogger,
        domain::{Money, Order},
        ports::LogError,
        services::OrderProcessor,
    },
    shape::{
        domain::{Circle, Rectangle},
        ports::Shape,
        services::AreaCalculator,
    },
};
use thiserror::Error;

/// Final line of the tour.
pub const GREETING: &str = "Hello S.O.L.I.D!";

/// Errors raised by any scenario during the tour.
#[derive(Debug, Error)]
pub enum TourError {
    /// Console output failed.
    #[error(transparent)]
    Console(#[from] ConsoleError),
    /// A document device failed.
    #[error(transparent)]
    Device(#[from] DeviceError),
    /// Order logging failed.
    #[error(transparent)]
    Log(#[from] LogError),
    /// Customer persistence failed.
    #[error(transparent)]
    Customer(#[from] CustomerServiceError),
    /// Customer registration failed.
    #[error(transparent)]
    Registration(#[from] RegistrationServiceError),
}

/// Result type for the tour.
pub type TourResult<T> = Result<T, TourError>;

/// Runs one example of each scenario against a console.
#[derive(Debug, Clone)]
pub struct Tour<C>
where
    C: Console,
{
    console: Arc<C>,
}

impl<C> Tour<C>
where
    C: Console,
{
    /// Creates a tour writing to `console`.
    #[must_use]
    pub const fn new(console: Arc<C>) -> Self {
        Self { console }
    }

    /// Runs every scenario in order and finishes with [`GREETING`].
    ///
    /// # Errors
    ///
    /// Returns the first scenario failure as a [`TourError`].
    pub fn run(&self) -> TourResult<()> {
        self.process_order()?;
        self.total_shape_area()?;
        self.play_animal_sounds()?;
        self.use_document_devices()?;
        self.persist_customers()?;
        self.register_customer()?;
        self.console.write_line(GREETING)?;
        tracing::info!("tour complete");
        Ok(())
    }

    fn process_order(&self) -> TourResult<()> {
        let processor = OrderProcessor::new(Arc::new(ConsoleLogger::new(Arc::clone(
            &self.console,
        ))));
        processor.process(&Order::new(1, "John Doe", Money::from_cents(10_000)))?;
        Ok(())
    }

    fn total_shape_area(&self) -> TourResult<()> {
        let shapes: Vec<Box<dyn Shape>> =
            vec![Box::new(Rectangle::new(10.0, 20.0)), Box::new(Circle::new(5.0))];
        let total = AreaCalculator::new().total_area(&shapes);
        self.console.write_line(&format!("Total area: {total}"))?;
        Ok(())
    }

    fn play_animal_sounds(&self) -> TourResult<()> {
        let player = AnimalSound::new(Arc::clone(&self.console));
        let animals: [&dyn Animal; 2] = [&Dog, &Cat];
        for animal in animals {
            player.play_sound(animal)?;
        }
        Ok(())
    }

    fn use_document_devices(&self) -> TourResult<()> {
        let laser = LaserJetPrinter::new(Arc::clone(&self.console));
        laser.print("Hello World!")?;
        laser.scan("Hello World!")?;
        InkjetPrinter::new(Arc::clone(&self.console)).print("Hello World!")?;
        Ok(())
    }

    fn persist_customers(&self) -> TourResult<()> {
        let record = CustomerRecord::new("John Doe")
            .with_email("john.doe@example.com")
            .with_phone("555-0100")
            .with_address("1 Main Street");
        self.save_customer(SqlServerCustomerRepository::new(), &record)?;
        self.save_customer(OracleCustomerRepository::new(), &record)?;
        Ok(())
    }

    fn save_customer<R: CustomerRepository>(
        &self,
        repository: R,
        record: &CustomerRecord,
    ) -> TourResult<()> {
        CustomerService::new(Arc::new(repository)).save(record)?;
        self.console
            .write_line(&format!("Customer saved: {}", record.name()))?;
        Ok(())
    }

    fn register_customer(&self) -> TourResult<()> {
        let registration = CustomerRegistration::new(Arc::new(NoopEmailSender::new()));
        let customer = registration.register_customer(RegisterCustomerRequest::new(
            "John Doe",
            "to@example.com",
        ))?;
        self.console
            .write_line(&format!("Customer registered: {}", customer.email()))?;
        Ok(())
    }
}
