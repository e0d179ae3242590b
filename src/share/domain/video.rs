//! Video content and the video file reference it wraps.

use super::SharePhoto;
use serde::{Deserialize, Serialize};
use url::Url;

/// A reference to a video file on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareVideo {
    local_url: Option<Url>,
}

impl ShareVideo {
    /// Creates a video reference pointing at `local_url`.
    #[must_use]
    pub const fn new(local_url: Url) -> Self {
        Self {
            local_url: Some(local_url),
        }
    }

    /// Creates a video reference with no location.
    #[must_use]
    pub const fn unlocated() -> Self {
        Self { local_url: None }
    }

    /// Returns the location of the video file, if any.
    #[must_use]
    pub const fn local_url(&self) -> Option<&Url> {
        self.local_url.as_ref()
    }
}

/// Content consisting of a single video and its preview image.
///
/// # Examples
///
/// ```
/// use sharecheck::share::domain::{ShareVideo, ShareVideoContent};
/// use url::Url;
///
/// let video = ShareVideo::new(Url::parse("file:///sdcard/clip.mp4").expect("valid url"));
/// let content = ShareVideoContent::builder()
///     .with_video(video)
///     .with_title("Clip")
///     .build();
/// assert!(content.preview_photo().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareVideoContent {
    video: Option<ShareVideo>,
    preview_photo: Option<SharePhoto>,
    title: Option<String>,
    description: Option<String>,
}

impl ShareVideoContent {
    /// Returns a builder with no video and no preview.
    #[must_use]
    pub fn builder() -> ShareVideoContentBuilder {
        ShareVideoContentBuilder::default()
    }

    /// Returns the video reference, if any.
    #[must_use]
    pub const fn video(&self) -> Option<&ShareVideo> {
        self.video.as_ref()
    }

    /// Returns the preview photo, if any.
    #[must_use]
    pub const fn preview_photo(&self) -> Option<&SharePhoto> {
        self.preview_photo.as_ref()
    }

    /// Returns the title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Builder for [`ShareVideoContent`].
#[derive(Debug, Clone, Default)]
pub struct ShareVideoContentBuilder {
    video: Option<ShareVideo>,
    preview_photo: Option<SharePhoto>,
    title: Option<String>,
    description: Option<String>,
}

impl ShareVideoContentBuilder {
    /// Sets the video reference.
    #[must_use]
    pub fn with_video(mut self, video: ShareVideo) -> Self {
        self.video = Some(video);
        self
    }

    /// Sets the preview photo.
    #[must_use]
    pub fn with_preview_photo(mut self, photo: SharePhoto) -> Self {
        self.preview_photo = Some(photo);
        self
    }

    /// Replaces the preview photo, clearing it when `None`.
    #[must_use]
    pub fn preview_photo(mut self, photo: Option<SharePhoto>) -> Self {
        self.preview_photo = photo;
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the video content.
    #[must_use]
    pub fn build(self) -> ShareVideoContent {
        ShareVideoContent {
            video: self.video,
            preview_photo: self.preview_photo,
            title: self.title,
            description: self.description,
        }
    }
}
