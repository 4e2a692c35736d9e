//! Shared world state for shape area BDD scenarios.

use rstest::fixture;
use solid_tour::shape::{ports::Shape, services::AreaCalculator};

/// Scenario world for shape area behaviour tests.
pub struct ShapeWorld {
    /// The calculator under test.
    pub calculator: AreaCalculator,
    /// Shapes queued for totalizing.
    pub shapes: Vec<Box<dyn Shape>>,
    /// Result of the last `total_area` call.
    pub last_total: Option<f64>,
}

impl ShapeWorld {
    /// Creates a world with no shapes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: AreaCalculator::new(),
            shapes: Vec::new(),
            last_total: None,
        }
    }
}

impl Default for ShapeWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ShapeWorld {
    ShapeWorld::default()
}
