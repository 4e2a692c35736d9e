//! Ellipse.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::Circle;
use crate::shape::ports::Shape;

/// Ellipse described by its two semi-axes.
///
/// A circle is the ellipse whose semi-axes are equal, and converts into one
/// through `From<Circle>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    semi_major: f64,
    semi_minor: f64,
}

impl Ellipse {
    /// Creates an ellipse from its semi-axes.
    #[must_use]
    pub const fn new(semi_major: f64, semi_minor: f64) -> Self {
        Self {
            semi_major,
            semi_minor,
        }
    }

    /// Returns the semi-major axis.
    #[must_use]
    pub const fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Returns the semi-minor axis.
    #[must_use]
    pub const fn semi_minor(&self) -> f64 {
        self.semi_minor
    }
}

impl From<Circle> for Ellipse {
    fn from(circle: Circle) -> Self {
        Self::new(circle.radius(), circle.radius())
    }
}

impl Shape for Ellipse {
    #[expect(clippy::float_arithmetic, reason = "area is pi times both semi-axes")]
    fn area(&self) -> f64 {
        PI * self.semi_major * self.semi_minor
    }

    fn name(&self) -> &'static str {
        "ellipse"
    }
}
