//! Link content.

use serde::{Deserialize, Serialize};
use url::Url;

/// A link to share, with an optional thumbnail and quoted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLinkContent {
    content_url: Option<Url>,
    image_url: Option<Url>,
    quote: Option<String>,
}

impl ShareLinkContent {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> ShareLinkContentBuilder {
        ShareLinkContentBuilder::default()
    }

    /// Returns the shared link, if any.
    #[must_use]
    pub const fn content_url(&self) -> Option<&Url> {
        self.content_url.as_ref()
    }

    /// Returns the thumbnail URL, if any.
    #[must_use]
    pub const fn image_url(&self) -> Option<&Url> {
        self.image_url.as_ref()
    }

    /// Returns the quoted text, if any.
    #[must_use]
    pub fn quote(&self) -> Option<&str> {
        self.quote.as_deref()
    }
}

/// Builder for [`ShareLinkContent`].
#[derive(Debug, Clone, Default)]
pub struct ShareLinkContentBuilder {
    content_url: Option<Url>,
    image_url: Option<Url>,
    quote: Option<String>,
}

impl ShareLinkContentBuilder {
    /// Sets the shared link.
    #[must_use]
    pub fn with_content_url(mut self, url: Url) -> Self {
        self.content_url = Some(url);
        self
    }

    /// Sets the thumbnail URL.
    #[must_use]
    pub fn with_image_url(mut self, url: Url) -> Self {
        self.image_url = Some(url);
        self
    }

    /// Sets the quoted text.
    #[must_use]
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }

    /// Builds the link content.
    #[must_use]
    pub fn build(self) -> ShareLinkContent {
        ShareLinkContent {
            content_url: self.content_url,
            image_url: self.image_url,
            quote: self.quote,
        }
    }
}
