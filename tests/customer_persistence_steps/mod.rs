//! Step definitions for customer persistence scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
