//! The tagged union over every kind of share content.

use super::{
    ShareCameraEffectContent, ShareLinkContent, ShareMediaContent, ShareOpenGraphContent,
    SharePhotoContent, ShareVideoContent,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content to be shared through a [`super::ShareChannel`].
///
/// # Serialisation
///
/// Content is serialised with a `kind` tag field:
///
/// ```json
/// { "kind": "photo", "photos": [...] }
/// { "kind": "open_graph", "action": {...}, "preview_property_name": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShareContent {
    /// A link.
    Link(ShareLinkContent),
    /// One or more photos.
    Photo(SharePhotoContent),
    /// A single video.
    Video(ShareVideoContent),
    /// A mix of photos and videos.
    Media(ShareMediaContent),
    /// An open graph action.
    OpenGraph(ShareOpenGraphContent),
    /// A camera effect.
    CameraEffect(ShareCameraEffectContent),
}

impl ShareContent {
    /// Returns the kind of content, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Link(_) => ContentKind::Link,
            Self::Photo(_) => ContentKind::Photo,
            Self::Video(_) => ContentKind::Video,
            Self::Media(_) => ContentKind::Media,
            Self::OpenGraph(_) => ContentKind::OpenGraph,
            Self::CameraEffect(_) => ContentKind::CameraEffect,
        }
    }
}

/// Discriminant of [`ShareContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Link content.
    Link,
    /// Photo content.
    Photo,
    /// Video content.
    Video,
    /// Media content.
    Media,
    /// Open graph content.
    OpenGraph,
    /// Camera effect content.
    CameraEffect,
}

impl ContentKind {
    /// Returns the name used in error messages and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Media => "media",
            Self::OpenGraph => "open graph",
            Self::CameraEffect => "camera effect",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ShareLinkContent> for ShareContent {
    fn from(content: ShareLinkContent) -> Self {
        Self::Link(content)
    }
}

impl From<SharePhotoContent> for ShareContent {
    fn from(content: SharePhotoContent) -> Self {
        Self::Photo(content)
    }
}

impl From<ShareVideoContent> for ShareContent {
    fn from(content: ShareVideoContent) -> Self {
        Self::Video(content)
    }
}

impl From<ShareMediaContent> for ShareContent {
    fn from(content: ShareMediaContent) -> Self {
        Self::Media(content)
    }
}

impl From<ShareOpenGraphContent> for ShareContent {
    fn from(content: ShareOpenGraphContent) -> Self {
        Self::OpenGraph(content)
    }
}

impl From<ShareCameraEffectContent> for ShareContent {
    fn from(content: ShareCameraEffectContent) -> Self {
        Self::CameraEffect(content)
    }
}
