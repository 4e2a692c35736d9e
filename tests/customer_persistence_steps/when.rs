//! When steps for customer persistence BDD scenarios.

use super::world::CustomerWorld;
use rstest_bdd_macros::when;
use solid_tour::customer::domain::CustomerRecord;

#[when(r#"the customer "{name}" is saved"#)]
fn save_customer(world: &mut CustomerWorld, name: String) -> Result<(), eyre::Report> {
    let service = world
        .service
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no customer service wired in scenario world"))?;
    world.last_save_result = Some(service.save(&CustomerRecord::new(name)));
    Ok(())
}
