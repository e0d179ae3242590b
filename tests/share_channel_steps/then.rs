//! Then steps for share channel BDD scenarios.

use super::world::ShareWorld;
use rstest_bdd_macros::then;

#[then("validation succeeds")]
fn validation_succeeds(world: &ShareWorld) -> Result<(), eyre::Report> {
    if world.results.is_empty() {
        return Err(eyre::eyre!("no validation result in scenario world"));
    }
    if let Some(Err(err)) = world.results.iter().find(|result| result.is_err()) {
        return Err(eyre::eyre!("expected validation to succeed, got: {err}"));
    }
    Ok(())
}

#[then("validation fails")]
fn validation_fails(world: &ShareWorld) -> Result<(), eyre::Report> {
    if world.results.is_empty() {
        return Err(eyre::eyre!("no validation result in scenario world"));
    }
    if world.results.iter().any(Result::is_ok) {
        return Err(eyre::eyre!("expected validation to fail"));
    }
    Ok(())
}
