//! Service that validates content and hands it to a sink.

use crate::share::{
    domain::{ShareChannel, ShareContent, ShareRequest},
    error::ShareServiceError,
    ports::{sink::ShareSink, validator::ShareContentValidator},
    validation::ChannelValidator,
};
use mockable::Clock;
use std::sync::Arc;

/// Result type for share service operations.
pub type ShareServiceResult<T> = Result<T, ShareServiceError>;

/// Validation-then-dispatch orchestration for a single channel.
///
/// Content that fails validation never reaches the sink.
#[derive(Clone)]
pub struct ShareService<S, C>
where
    S: ShareSink,
    C: Clock + Send + Sync,
{
    validator: ChannelValidator,
    sink: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> ShareService<S, C>
where
    S: ShareSink,
    C: Clock + Send + Sync,
{
    /// Creates a share service that validates with `validator`.
    #[must_use]
    pub const fn new(validator: ChannelValidator, sink: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            validator,
            sink,
            clock,
        }
    }

    /// Returns the channel this service shares through.
    #[must_use]
    pub fn channel(&self) -> ShareChannel {
        self.validator.channel()
    }

    /// Validates `content` and publishes it to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`ShareServiceError::Validation`] when the content breaks a
    /// channel rule, or [`ShareServiceError::Sink`] when the sink fails.
    pub async fn share(&self, content: ShareContent) -> ShareServiceResult<ShareRequest> {
        self.validator.validate(Some(&content))?;

        let request = ShareRequest::new(self.channel(), content, &*self.clock);
        tracing::debug!(
            share_id = %request.id(),
            channel = %request.channel(),
            kind = %request.content().kind(),
            "publishing share request"
        );
        self.sink.publish(&request).await?;
        Ok(request)
    }
}
