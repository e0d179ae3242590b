//! Sink port receiving validated share requests.

use crate::share::{domain::ShareRequest, error::ShareSinkError};
use async_trait::async_trait;

/// Result type for sink operations.
pub type ShareSinkResult<T> = Result<T, ShareSinkError>;

/// Destination for validated shares, implemented by the host application.
#[async_trait]
pub trait ShareSink: Send + Sync {
    /// Accepts a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`ShareSinkError`] when the sink cannot accept the request.
    async fn publish(&self, request: &ShareRequest) -> ShareSinkResult<()>;
}
