//! Then steps for customer persistence BDD scenarios.

use super::world::CustomerWorld;
use rstest_bdd_macros::then;

#[then("the save completes without error")]
fn save_completes(world: &CustomerWorld) -> Result<(), eyre::Report> {
    match world.last_save_result.as_ref() {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("save failed: {err}")),
        None => Err(eyre::eyre!("missing save result in scenario world")),
    }
}

#[then(r#"the repository holds {count:usize} record named "{name}""#)]
fn repository_holds(world: &CustomerWorld, count: usize, name: String) -> Result<(), eyre::Report> {
    let repository = world
        .memory
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no in-memory repository wired in scenario world"))?;
    let records = repository
        .records()
        .map_err(|err| eyre::eyre!("reading records failed: {err}"))?;
    let matching = records.iter().filter(|record| record.name() == name).count();
    if records.len() != count || matching != count {
        return Err(eyre::eyre!(
            "expected {count} record(s) named '{name}', found {} of {}",
            matching,
            records.len()
        ));
    }
    Ok(())
}
