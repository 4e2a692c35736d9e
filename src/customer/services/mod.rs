//! Application services for customer persistence and registration.

mod registration;
mod registry;

pub use registration::{
    CustomerRegistration, RegisterCustomerRequest, RegistrationServiceError,
    RegistrationServiceResult, WELCOME_SUBJECT,
};
pub use registry::{CustomerService, CustomerServiceError, CustomerServiceResult};
