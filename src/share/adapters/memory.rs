//! In-memory share sink for tests and embedding.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::share::{
    domain::{ShareId, ShareRequest},
    error::ShareSinkError,
    ports::sink::{ShareSink, ShareSinkResult},
};

/// Thread-safe sink that records every published request.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShareSink {
    requests: Arc<RwLock<Vec<ShareRequest>>>,
}

impl InMemoryShareSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every published request in publication order.
    ///
    /// # Errors
    ///
    /// Returns [`ShareSinkError::Failure`] if the lock is poisoned.
    pub fn published(&self) -> ShareSinkResult<Vec<ShareRequest>> {
        let requests = self
            .requests
            .read()
            .map_err(|err| ShareSinkError::failure(std::io::Error::other(err.to_string())))?;
        Ok(requests.clone())
    }

    /// Returns `true` if a request with `id` has been published.
    ///
    /// # Errors
    ///
    /// Returns [`ShareSinkError::Failure`] if the lock is poisoned.
    pub fn contains(&self, id: ShareId) -> ShareSinkResult<bool> {
        let requests = self
            .requests
            .read()
            .map_err(|err| ShareSinkError::failure(std::io::Error::other(err.to_string())))?;
        Ok(requests.iter().any(|request| request.id() == id))
    }
}

#[async_trait]
impl ShareSink for InMemoryShareSink {
    async fn publish(&self, request: &ShareRequest) -> ShareSinkResult<()> {
        let mut requests = self
            .requests
            .write()
            .map_err(|err| ShareSinkError::failure(std::io::Error::other(err.to_string())))?;

        if requests.iter().any(|existing| existing.id() == request.id()) {
            return Err(ShareSinkError::rejected(format!(
                "duplicate share request {}",
                request.id()
            )));
        }

        requests.push(request.clone());
        Ok(())
    }
}
