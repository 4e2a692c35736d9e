//! Behaviour tests for shape area totalizing.

mod shape_area_steps;

use rstest_bdd_macros::scenario;
use shape_area_steps::world::{ShapeWorld, world};

#[scenario(
    path = "tests/features/shape_area.feature",
    name = "Total a rectangle and a circle"
)]
fn total_rectangle_and_circle(world: ShapeWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shape_area.feature",
    name = "Total an empty sequence"
)]
fn total_empty_sequence(world: ShapeWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shape_area.feature",
    name = "Total matches the sum of individual areas"
)]
fn total_matches_sum(world: ShapeWorld) {
    let _ = world;
}
