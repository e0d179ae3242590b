//! Photo references shared on their own, inside videos, media, or open
//! graph properties.

use serde::{Deserialize, Serialize};
use url::Url;

/// Decoded image data held in memory by the host application.
///
/// # Examples
///
/// ```
/// use sharecheck::share::domain::Bitmap;
///
/// let bitmap = Bitmap::new(vec![0; 16], 2, 2);
/// assert!(!bitmap.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitmap {
    /// Raw pixel bytes.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Bitmap {
    /// Creates a bitmap from raw pixel bytes and dimensions.
    #[must_use]
    pub const fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Returns `true` when the bitmap carries no pixel data.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A single photo to be shared.
///
/// A photo is sourced either from an image URL or from an in-memory
/// [`Bitmap`]. Neither is required at construction; validators decide
/// which sources a sharing channel accepts.
///
/// # Examples
///
/// ```
/// use sharecheck::share::domain::SharePhoto;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/cat.gif").expect("valid url");
/// let photo = SharePhoto::builder().with_image_url(url).build();
/// assert!(photo.image_url().is_some());
/// assert!(photo.bitmap().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePhoto {
    image_url: Option<Url>,
    bitmap: Option<Bitmap>,
    caption: Option<String>,
    user_generated: bool,
}

impl SharePhoto {
    /// Returns a builder for a photo with no image source.
    #[must_use]
    pub fn builder() -> SharePhotoBuilder {
        SharePhotoBuilder::default()
    }

    /// Creates a photo that points at an image URL.
    #[must_use]
    pub fn from_url(image_url: Url) -> Self {
        Self::builder().with_image_url(image_url).build()
    }

    /// Returns the image URL, if any.
    #[must_use]
    pub const fn image_url(&self) -> Option<&Url> {
        self.image_url.as_ref()
    }

    /// Returns the in-memory bitmap, if any.
    #[must_use]
    pub const fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_ref()
    }

    /// Returns the caption, if any.
    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Returns `true` if the photo was taken by the sharing user.
    #[must_use]
    pub const fn user_generated(&self) -> bool {
        self.user_generated
    }
}

/// Builder for [`SharePhoto`].
#[derive(Debug, Clone, Default)]
pub struct SharePhotoBuilder {
    image_url: Option<Url>,
    bitmap: Option<Bitmap>,
    caption: Option<String>,
    user_generated: bool,
}

impl SharePhotoBuilder {
    /// Sets the image URL.
    #[must_use]
    pub fn with_image_url(mut self, image_url: Url) -> Self {
        self.image_url = Some(image_url);
        self
    }

    /// Replaces the image URL, clearing it when `None`.
    #[must_use]
    pub fn image_url(mut self, image_url: Option<Url>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Sets the in-memory bitmap.
    #[must_use]
    pub fn with_bitmap(mut self, bitmap: Bitmap) -> Self {
        self.bitmap = Some(bitmap);
        self
    }

    /// Replaces the bitmap, clearing it when `None`.
    #[must_use]
    pub fn bitmap(mut self, bitmap: Option<Bitmap>) -> Self {
        self.bitmap = bitmap;
        self
    }

    /// Sets the caption.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Marks the photo as taken by the sharing user.
    #[must_use]
    pub const fn with_user_generated(mut self, user_generated: bool) -> Self {
        self.user_generated = user_generated;
        self
    }

    /// Builds the photo.
    #[must_use]
    pub fn build(self) -> SharePhoto {
        SharePhoto {
            image_url: self.image_url,
            bitmap: self.bitmap,
            caption: self.caption,
            user_generated: self.user_generated,
        }
    }
}

/// Content consisting of one or more photos.
///
/// The builder accepts an empty list; validators reject it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePhotoContent {
    photos: Vec<SharePhoto>,
}

impl SharePhotoContent {
    /// Returns a builder with no photos.
    #[must_use]
    pub fn builder() -> SharePhotoContentBuilder {
        SharePhotoContentBuilder::default()
    }

    /// Returns the photos in insertion order.
    #[must_use]
    pub fn photos(&self) -> &[SharePhoto] {
        &self.photos
    }
}

/// Builder for [`SharePhotoContent`].
#[derive(Debug, Clone, Default)]
pub struct SharePhotoContentBuilder {
    photos: Vec<SharePhoto>,
}

impl SharePhotoContentBuilder {
    /// Appends a photo.
    #[must_use]
    pub fn add_photo(mut self, photo: SharePhoto) -> Self {
        self.photos.push(photo);
        self
    }

    /// Appends several photos.
    #[must_use]
    pub fn add_photos(mut self, photos: impl IntoIterator<Item = SharePhoto>) -> Self {
        self.photos.extend(photos);
        self
    }

    /// Builds the photo content.
    #[must_use]
    pub fn build(self) -> SharePhotoContent {
        SharePhotoContent {
            photos: self.photos,
        }
    }
}
