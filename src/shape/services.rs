//! Area totalizing service.

use crate::shape::ports::Shape;

/// Sums the areas of a sequence of shapes.
///
/// The calculator only sees the [`Shape`] port, so new shapes plug in
/// without touching this type.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaCalculator;

impl AreaCalculator {
    /// Creates an area calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the sum of every shape's area, visiting shapes in order.
    ///
    /// An empty slice totals `0.0`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "areas are accumulated as f64")]
    pub fn total_area(&self, shapes: &[Box<dyn Shape>]) -> f64 {
        // Folding from +0.0 keeps the empty total positive; f64's `Sum` starts at -0.0.
        let total = shapes.iter().fold(0.0, |acc, shape| {
            let area = shape.area();
            tracing::debug!(shape = shape.name(), area, "measured shape");
            acc + area
        });
        tracing::debug!(shapes = shapes.len(), total, "computed total area");
        total
    }
}
