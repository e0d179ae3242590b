//! Error types for share content validation and dispatch.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use super::domain::{ContentKind, ShareChannel};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised when share content is not acceptable for a channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No content was supplied.
    #[error("must provide non-null content to share")]
    MissingContent,

    /// The channel cannot carry this kind of content.
    #[error("cannot share {kind} content via the {channel} channel")]
    UnsupportedContent {
        /// The rejected content kind.
        kind: ContentKind,
        /// The channel that rejected it.
        channel: ShareChannel,
    },

    /// Photo content holds no photos.
    #[error("must specify at least one photo in photo content")]
    MissingPhotos,

    /// Photo content holds more photos than the channel allows.
    #[error("cannot add more than {max} photos, found {actual}")]
    TooManyPhotos {
        /// The maximum allowed number of photos.
        max: usize,
        /// The actual number of photos.
        actual: usize,
    },

    /// A photo has neither a bitmap nor an image URL.
    #[error("photo does not have a bitmap or image URL specified")]
    MissingImageSource,

    /// A photo outside open graph content points at an image on the web.
    #[error("photo image URL must reference an image on the device, found {0}")]
    WebImageNotAllowed(String),

    /// A photo shared through the web channel lacks an `http(s)` image URL.
    #[error("photo must have an image URL set to an image on the web")]
    ImageUrlNotOnWeb,

    /// Video content carries no video.
    #[error("cannot share a null video")]
    MissingVideo,

    /// The video has no location.
    #[error("video does not have a local URL specified")]
    MissingVideoUrl,

    /// The video location is not on the device.
    #[error("video must reference a file on the device, found {0}")]
    VideoNotOnDevice(String),

    /// Video content carries no preview photo.
    #[error("video content must have a preview photo")]
    MissingPreviewPhoto,

    /// Media content holds no media.
    #[error("must specify at least one medium in media content")]
    MissingMedia,

    /// Media content holds more items than allowed.
    #[error("cannot add more than {max} media, found {actual}")]
    TooManyMedia {
        /// The maximum allowed number of media.
        max: usize,
        /// The actual number of media.
        actual: usize,
    },

    /// A link thumbnail does not use `http` or `https`.
    #[error("link image URL must be an http:// or https:// URL, found {0}")]
    InvalidLinkImageUrl(String),

    /// The API channel does not publish quoted text.
    #[error("cannot share link content with a quote via the api channel")]
    QuoteNotSupported,

    /// Open graph content carries no action.
    #[error("must specify a non-null open graph action")]
    MissingAction,

    /// The open graph action has no type.
    #[error("open graph action must have a non-empty action type")]
    MissingActionType,

    /// Open graph content names no preview property.
    #[error("must specify a preview property name")]
    MissingPreviewPropertyName,

    /// The preview property is absent from the action.
    #[error("property \"{0}\" was not found on the action")]
    PreviewPropertyNotFound(String),

    /// An open graph object key lacks a namespace.
    #[error("open graph keys must be namespaced, found \"{0}\"")]
    KeyNotNamespaced(String),

    /// Camera effect content names no effect.
    #[error("must specify a non-empty effect id")]
    MissingEffectId,
}

impl ValidationError {
    /// Creates an unsupported-content error.
    #[must_use]
    pub const fn unsupported(kind: ContentKind, channel: ShareChannel) -> Self {
        Self::UnsupportedContent { kind, channel }
    }
}

/// Errors returned by share sink implementations.
#[derive(Debug, Clone, Error)]
pub enum ShareSinkError {
    /// The sink refused the request.
    #[error("share rejected by sink: {0}")]
    Rejected(String),

    /// The sink failed to record or forward the request.
    #[error("sink failure: {0}")]
    Failure(Arc<dyn std::error::Error + Send + Sync>),
}

impl ShareSinkError {
    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Wraps an underlying failure.
    pub fn failure(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Failure(Arc::new(err))
    }
}

/// Errors returned by the share service.
#[derive(Debug, Clone, Error)]
pub enum ShareServiceError {
    /// Content failed validation for the service channel.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The sink failed.
    #[error(transparent)]
    Sink(#[from] ShareSinkError),
}
