//! Port definitions for share validation and dispatch.

pub mod sink;
pub mod validator;

pub use sink::{ShareSink, ShareSinkResult};
pub use validator::{ShareContentValidator, ValidationConfig, ValidationResult};
