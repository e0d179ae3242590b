//! Step definitions for share channel BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
