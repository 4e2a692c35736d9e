//! Unit tests for customer persistence and registration services.

use std::sync::Arc;

use crate::customer::{
    adapters::{
        InMemoryCustomerRepository, NoopEmailSender, OracleCustomerRepository,
        OutboxEmailSender, SqlServerCustomerRepository,
    },
    domain::{Customer, CustomerDomainError, CustomerRecord},
    ports::{
        CustomerRepository, MockCustomerRepository, MockEmailSender, NotificationError,
        RepositoryError,
    },
    services::{
        CustomerRegistration, CustomerService, CustomerServiceError, RegisterCustomerRequest,
        RegistrationServiceError, WELCOME_SUBJECT,
    },
};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

#[fixture]
fn john() -> Customer {
    Customer::new("John Doe", "john@example.com").expect("valid customer")
}

fn save_with<R: CustomerRepository>(repository: R) -> Result<(), CustomerServiceError> {
    CustomerService::new(Arc::new(repository)).save(&CustomerRecord::new("John Doe"))
}

// ── CustomerService ────────────────────────────────────────────────

#[rstest]
fn stub_repositories_accept_well_formed_records() {
    save_with(SqlServerCustomerRepository::new()).expect("sql server stub should accept");
    save_with(OracleCustomerRepository::new()).expect("oracle stub should accept");
}

#[rstest]
fn add_customer_calls_save_exactly_once(john: Customer) {
    let expected = CustomerRecord::from(&john);
    let mut repository = MockCustomerRepository::new();
    repository
        .expect_save()
        .with(eq(expected))
        .times(1)
        .returning(|_| Ok(()));
    let service = CustomerService::new(Arc::new(repository));

    service.add_customer(&john).expect("add should succeed");
}

#[rstest]
fn saved_records_reach_the_injected_repository(john: Customer) {
    let repository = InMemoryCustomerRepository::new();
    let service = CustomerService::new(Arc::new(repository.clone()));

    service.add_customer(&john).expect("add should succeed");
    service
        .save(&CustomerRecord::new("Maria"))
        .expect("save should succeed");

    let names: Vec<String> = repository
        .records()
        .expect("records should be readable")
        .iter()
        .map(|record| record.name().to_owned())
        .collect();
    assert_eq!(names, vec!["John Doe", "Maria"]);
}

#[rstest]
fn repository_failure_is_surfaced() {
    let mut repository = MockCustomerRepository::new();
    repository.expect_save().times(1).returning(|_| {
        Err(RepositoryError::persistence(std::io::Error::other(
            "connection refused",
        )))
    });
    let service = CustomerService::new(Arc::new(repository));

    let result = service.save(&CustomerRecord::new("John Doe"));

    assert!(matches!(
        result,
        Err(CustomerServiceError::Repository(RepositoryError::Persistence(_)))
    ));
}

// ── CustomerRegistration ───────────────────────────────────────────

#[rstest]
fn registration_sends_one_welcome_email() {
    let outbox = OutboxEmailSender::new();
    let registration = CustomerRegistration::new(Arc::new(outbox.clone()));

    let customer = registration
        .register_customer(RegisterCustomerRequest::new("John Doe", "John@Example.com"))
        .expect("registration should succeed");

    let sent = outbox.sent().expect("outbox should be readable");
    assert_eq!(sent.len(), 1);
    let email = sent.first().expect("one email");
    assert_eq!(email.to(), customer.email());
    assert_eq!(email.subject(), WELCOME_SUBJECT);
    assert!(email.body().contains("John Doe"));
}

#[rstest]
fn registration_with_stub_sender_completes() {
    let registration = CustomerRegistration::new(Arc::new(NoopEmailSender::new()));

    let result =
        registration.register_customer(RegisterCustomerRequest::new("Ana", "ana@example.com"));

    assert!(result.is_ok());
}

#[rstest]
fn invalid_registration_sends_nothing() {
    let mut sender = MockEmailSender::new();
    sender.expect_send_email().never();
    let registration = CustomerRegistration::new(Arc::new(sender));

    let result = registration.register_customer(RegisterCustomerRequest::new("Ana", "not-an-email"));

    assert!(matches!(
        result,
        Err(RegistrationServiceError::Domain(
            CustomerDomainError::InvalidEmail(_)
        ))
    ));
}

#[rstest]
fn transport_failure_is_surfaced() {
    let mut sender = MockEmailSender::new();
    sender.expect_send_email().times(1).returning(|_| {
        Err(NotificationError::transport(std::io::Error::other(
            "smtp unavailable",
        )))
    });
    let registration = CustomerRegistration::new(Arc::new(sender));

    let result =
        registration.register_customer(RegisterCustomerRequest::new("Ana", "ana@example.com"));

    assert!(matches!(
        result,
        Err(RegistrationServiceError::Notification(_))
    ));
}
