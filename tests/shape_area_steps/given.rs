//! Given steps for shape area BDD scenarios.

use super::world::ShapeWorld;
use rstest_bdd_macros::given;
use solid_tour::shape::domain::{Circle, Rectangle};

#[given("a rectangle {width:u32} by {height:u32}")]
fn a_rectangle(world: &mut ShapeWorld, width: u32, height: u32) {
    world
        .shapes
        .push(Box::new(Rectangle::new(f64::from(width), f64::from(height))));
}

#[given("a circle of radius {radius:u32}")]
fn a_circle(world: &mut ShapeWorld, radius: u32) {
    world.shapes.push(Box::new(Circle::new(f64::from(radius))));
}
