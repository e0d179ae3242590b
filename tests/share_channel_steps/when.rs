//! When steps for share channel BDD scenarios.

use super::world::ShareWorld;
use rstest_bdd_macros::when;
use sharecheck::share::{domain::ShareChannel, validation::validate_for_channel};

#[when(r#"the content is validated for the "{channel}" channel"#)]
fn validate_for_named_channel(world: &mut ShareWorld, channel: String) -> Result<(), eyre::Report> {
    let parsed: ShareChannel = channel
        .parse()
        .map_err(|err| eyre::eyre!("bad channel in scenario: {err}"))?;
    world.results = vec![validate_for_channel(world.content.as_ref(), parsed)];
    Ok(())
}

#[when("the content is validated for every channel")]
fn validate_for_every_channel(world: &mut ShareWorld) {
    world.results = ShareChannel::ALL
        .into_iter()
        .map(|channel| validate_for_channel(world.content.as_ref(), channel))
        .collect();
}
