//! Step definitions for shape area scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
