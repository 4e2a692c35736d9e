//! When steps for shape area BDD scenarios.

use super::world::ShapeWorld;
use rstest_bdd_macros::when;

#[when("the total area is computed")]
fn compute_total(world: &mut ShapeWorld) {
    world.last_total = Some(world.calculator.total_area(&world.shapes));
}
