//! Mixed photo and video content, plus camera effects.

use super::{SharePhoto, ShareVideo};
use serde::{Deserialize, Serialize};

/// One item of [`ShareMediaContent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShareMedium {
    /// A photo.
    Photo(SharePhoto),
    /// A video.
    Video(ShareVideo),
}

/// Content consisting of an ordered mix of photos and videos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMediaContent {
    media: Vec<ShareMedium>,
}

impl ShareMediaContent {
    /// Creates media content from the given items.
    #[must_use]
    pub fn new(media: impl IntoIterator<Item = ShareMedium>) -> Self {
        Self {
            media: media.into_iter().collect(),
        }
    }

    /// Returns the media in insertion order.
    #[must_use]
    pub fn media(&self) -> &[ShareMedium] {
        &self.media
    }

    /// Returns a copy with `medium` appended.
    #[must_use]
    pub fn with_medium(mut self, medium: ShareMedium) -> Self {
        self.media.push(medium);
        self
    }
}

/// Content that opens a camera effect in the receiving application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCameraEffectContent {
    effect_id: Option<String>,
}

impl ShareCameraEffectContent {
    /// Creates camera effect content for `effect_id`.
    #[must_use]
    pub fn new(effect_id: impl Into<String>) -> Self {
        Self {
            effect_id: Some(effect_id.into()),
        }
    }

    /// Returns the effect identifier, if any.
    #[must_use]
    pub fn effect_id(&self) -> Option<&str> {
        self.effect_id.as_deref()
    }
}
