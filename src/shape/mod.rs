//! Shape-area scenario.
//!
//! [`AreaCalculator`](services::AreaCalculator) totals the area of any
//! sequence of [`Shape`](ports::Shape) values. Adding a new shape means
//! implementing the port; the calculator never changes.
//!
//! - Shape variants in [`domain`]
//! - The area capability in [`ports`]
//! - The totalizing consumer in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
