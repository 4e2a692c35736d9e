//! Given steps for customer persistence BDD scenarios.

use super::world::CustomerWorld;
use rstest_bdd_macros::given;

#[given(r#"a customer service backed by the "{backend}" repository"#)]
fn a_customer_service(world: &mut CustomerWorld, backend: String) -> Result<(), eyre::Report> {
    world.wire(&backend)
}
