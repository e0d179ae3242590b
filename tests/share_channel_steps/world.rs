//! Shared world state for share channel BDD scenarios.

use rstest::fixture;
use sharecheck::share::{domain::ShareContent, ports::validator::ValidationResult};

/// Scenario world for share channel behaviour tests.
#[derive(Default)]
pub struct ShareWorld {
    /// Content under test; `None` models an absent payload.
    pub content: Option<ShareContent>,
    /// Results of the last validation step, one per channel validated.
    pub results: Vec<ValidationResult<()>>,
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ShareWorld {
    ShareWorld::default()
}
