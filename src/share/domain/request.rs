//! A validated share ready to hand to a sink.

use super::{ShareChannel, ShareContent, ShareId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Content that passed validation for a channel.
///
/// Only the share service constructs requests, after validation succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRequest {
    id: ShareId,
    channel: ShareChannel,
    content: ShareContent,
    requested_at: DateTime<Utc>,
}

impl ShareRequest {
    pub(crate) fn new(channel: ShareChannel, content: ShareContent, clock: &impl Clock) -> Self {
        Self {
            id: ShareId::new(),
            channel,
            content,
            requested_at: clock.utc(),
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn id(&self) -> ShareId {
        self.id
    }

    /// Returns the channel the content was validated for.
    #[must_use]
    pub const fn channel(&self) -> ShareChannel {
        self.channel
    }

    /// Returns the validated content.
    #[must_use]
    pub const fn content(&self) -> &ShareContent {
        &self.content
    }

    /// Returns when the request was created.
    #[must_use]
    pub const fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }
}
