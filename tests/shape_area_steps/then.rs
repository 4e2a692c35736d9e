//! Then steps for shape area BDD scenarios.

use super::world::ShapeWorld;
use rstest_bdd_macros::then;

const TOLERANCE: f64 = 1e-2;

fn last_total(world: &ShapeWorld) -> Result<f64, eyre::Report> {
    world
        .last_total
        .ok_or_else(|| eyre::eyre!("total area was not computed"))
}

#[then("the total area is approximately {expected}")]
fn total_is_approximately(world: &ShapeWorld, expected: String) -> Result<(), eyre::Report> {
    let wanted: f64 = expected
        .parse()
        .map_err(|err| eyre::eyre!("bad expected area '{expected}': {err}"))?;
    let total = last_total(world)?;
    if (total - wanted).abs() > TOLERANCE {
        return Err(eyre::eyre!("expected total area {wanted}, got {total}"));
    }
    Ok(())
}

#[then("the total area equals the sum of the individual areas")]
fn total_equals_sum(world: &ShapeWorld) -> Result<(), eyre::Report> {
    let expected: f64 = world.shapes.iter().map(|shape| shape.area()).sum();
    let total = last_total(world)?;
    if (total - expected).abs() > f64::EPSILON * 16.0 {
        return Err(eyre::eyre!("expected {expected}, got {total}"));
    }
    Ok(())
}
