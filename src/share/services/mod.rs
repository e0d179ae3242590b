//! Service layer for share dispatch.

mod dispatch;

pub use dispatch::{ShareService, ShareServiceResult};
