//! Unit tests for customer persistence and registration.

mod service_tests;
