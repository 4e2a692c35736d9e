//! Circle.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::shape::ports::Shape;

/// Circle described by its radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a circle.
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Returns the radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    #[expect(clippy::float_arithmetic, reason = "area is pi times radius squared")]
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}
