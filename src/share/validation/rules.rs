//! Individual validation rule implementations.
//!
//! Each rule is a pure function over one kind of content and the channel it
//! is headed for. Rules fail fast, returning the first broken rule as a
//! [`ValidationError`].

use crate::share::{
    domain::{
        ContentKind, OpenGraphProperties, OpenGraphValue, ShareCameraEffectContent, ShareChannel,
        ShareContent, ShareLinkContent, ShareMediaContent, ShareMedium, ShareOpenGraphAction,
        ShareOpenGraphContent, SharePhoto, SharePhotoContent, ShareVideo, ShareVideoContent,
    },
    error::ValidationError,
    ports::validator::{ValidationConfig, ValidationResult},
};
use url::Url;

/// Where a photo appears, which decides whether web images are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoContext {
    /// Photo, video, or media content.
    Standalone,
    /// A property value of an open graph action or object.
    OpenGraph,
}

/// Validates any content for `channel`.
///
/// # Errors
///
/// Returns the error for the first rule the content breaks.
pub fn validate_content(
    content: &ShareContent,
    channel: ShareChannel,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    match content {
        ShareContent::Link(link) => validate_link_content(link, channel),
        ShareContent::Photo(photos) => validate_photo_content(photos, channel, config),
        ShareContent::Video(video) => validate_video_content(video, channel),
        ShareContent::Media(media) => validate_media_content(media, channel, config),
        ShareContent::OpenGraph(open_graph) => validate_open_graph_content(open_graph, channel),
        ShareContent::CameraEffect(effect) => validate_camera_effect_content(effect, channel),
    }
}

/// Validates link content.
///
/// # Errors
///
/// Returns `ValidationError::QuoteNotSupported` when a quote is shared via
/// the API, or `ValidationError::InvalidLinkImageUrl` when the thumbnail is
/// not an `http(s)` URL.
pub fn validate_link_content(
    link: &ShareLinkContent,
    channel: ShareChannel,
) -> ValidationResult<()> {
    if channel == ShareChannel::Api && link.quote().is_some_and(|quote| !quote.is_empty()) {
        return Err(ValidationError::QuoteNotSupported);
    }

    if let Some(image_url) = link.image_url()
        && !is_web_url(image_url)
    {
        return Err(ValidationError::InvalidLinkImageUrl(image_url.to_string()));
    }

    Ok(())
}

/// Validates photo content.
///
/// # Errors
///
/// Returns `ValidationError::MissingPhotos` for an empty list,
/// `ValidationError::TooManyPhotos` above the configured limit, or the
/// first photo error.
pub fn validate_photo_content(
    content: &SharePhotoContent,
    channel: ShareChannel,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    let photos = content.photos();
    if photos.is_empty() {
        return Err(ValidationError::MissingPhotos);
    }

    if photos.len() > config.max_photo_count {
        return Err(ValidationError::TooManyPhotos {
            max: config.max_photo_count,
            actual: photos.len(),
        });
    }

    photos
        .iter()
        .try_for_each(|photo| validate_photo(photo, channel, PhotoContext::Standalone))
}

/// Validates a single photo against the photo rule of `channel`.
///
/// The web channel needs an image on the web. Every other channel needs a
/// bitmap or an image URL, and outside open graph content that URL must
/// not point at the web unless a bitmap is also present.
///
/// # Errors
///
/// Returns `ValidationError::ImageUrlNotOnWeb`,
/// `ValidationError::MissingImageSource`, or
/// `ValidationError::WebImageNotAllowed`.
pub fn validate_photo(
    photo: &SharePhoto,
    channel: ShareChannel,
    context: PhotoContext,
) -> ValidationResult<()> {
    match channel {
        ShareChannel::Web => validate_photo_for_web(photo),
        ShareChannel::Message | ShareChannel::Native | ShareChannel::Api => {
            validate_photo_for_device(photo, context)
        }
    }
}

/// Validates video content.
///
/// # Errors
///
/// Returns `ValidationError::UnsupportedContent` on the web channel,
/// the video error, or `ValidationError::MissingPreviewPhoto`.
pub fn validate_video_content(
    content: &ShareVideoContent,
    channel: ShareChannel,
) -> ValidationResult<()> {
    if channel == ShareChannel::Web {
        return Err(ValidationError::unsupported(ContentKind::Video, channel));
    }

    let video = content.video().ok_or(ValidationError::MissingVideo)?;
    validate_video(video)?;

    let preview = content
        .preview_photo()
        .ok_or(ValidationError::MissingPreviewPhoto)?;
    validate_photo(preview, channel, PhotoContext::Standalone)
}

/// Validates that a video points at a file on the device.
///
/// # Errors
///
/// Returns `ValidationError::MissingVideoUrl` or
/// `ValidationError::VideoNotOnDevice`.
pub fn validate_video(video: &ShareVideo) -> ValidationResult<()> {
    let local_url = video.local_url().ok_or(ValidationError::MissingVideoUrl)?;
    if !is_device_url(local_url) {
        return Err(ValidationError::VideoNotOnDevice(local_url.to_string()));
    }
    Ok(())
}

/// Validates media content.
///
/// # Errors
///
/// Returns `ValidationError::UnsupportedContent` on the web and API
/// channels, `ValidationError::MissingMedia`,
/// `ValidationError::TooManyMedia`, or the first medium error.
pub fn validate_media_content(
    content: &ShareMediaContent,
    channel: ShareChannel,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    if matches!(channel, ShareChannel::Web | ShareChannel::Api) {
        return Err(ValidationError::unsupported(ContentKind::Media, channel));
    }

    let media = content.media();
    if media.is_empty() {
        return Err(ValidationError::MissingMedia);
    }

    if media.len() > config.max_media_count {
        return Err(ValidationError::TooManyMedia {
            max: config.max_media_count,
            actual: media.len(),
        });
    }

    media.iter().try_for_each(|medium| match medium {
        ShareMedium::Photo(photo) => validate_photo(photo, channel, PhotoContext::Standalone),
        ShareMedium::Video(video) => validate_video(video),
    })
}

/// Validates open graph content.
///
/// # Errors
///
/// Returns the action error, `ValidationError::MissingPreviewPropertyName`,
/// or `ValidationError::PreviewPropertyNotFound`.
pub fn validate_open_graph_content(
    content: &ShareOpenGraphContent,
    channel: ShareChannel,
) -> ValidationResult<()> {
    let action = content.action().ok_or(ValidationError::MissingAction)?;
    validate_open_graph_action(action, channel)?;

    let preview_name = content
        .preview_property_name()
        .filter(|name| !name.is_empty())
        .ok_or(ValidationError::MissingPreviewPropertyName)?;

    if action.get(preview_name).is_none() {
        return Err(ValidationError::PreviewPropertyNotFound(
            preview_name.to_owned(),
        ));
    }

    Ok(())
}

/// Validates an open graph action and its property values.
///
/// Action keys need no namespace; keys of nested objects do.
///
/// # Errors
///
/// Returns `ValidationError::MissingActionType` or the first property
/// error.
pub fn validate_open_graph_action(
    action: &ShareOpenGraphAction,
    channel: ShareChannel,
) -> ValidationResult<()> {
    if action.action_type().is_none_or(|kind| kind.trim().is_empty()) {
        return Err(ValidationError::MissingActionType);
    }

    validate_open_graph_properties(action.properties(), channel, false)
}

/// Validates that an open graph key has the form `namespace:name`.
///
/// # Errors
///
/// Returns `ValidationError::KeyNotNamespaced` when the key has fewer than
/// two components or an empty component.
pub fn validate_open_graph_key(key: &str) -> ValidationResult<()> {
    let mut components = key.split(':');
    let has_namespace = components.clone().count() >= 2;
    if !has_namespace || components.any(str::is_empty) {
        return Err(ValidationError::KeyNotNamespaced(key.to_owned()));
    }
    Ok(())
}

/// Validates camera effect content.
///
/// # Errors
///
/// Returns `ValidationError::UnsupportedContent` on the web and API
/// channels, or `ValidationError::MissingEffectId`.
pub fn validate_camera_effect_content(
    content: &ShareCameraEffectContent,
    channel: ShareChannel,
) -> ValidationResult<()> {
    if matches!(channel, ShareChannel::Web | ShareChannel::Api) {
        return Err(ValidationError::unsupported(
            ContentKind::CameraEffect,
            channel,
        ));
    }

    if content.effect_id().is_none_or(|id| id.trim().is_empty()) {
        return Err(ValidationError::MissingEffectId);
    }

    Ok(())
}

fn validate_open_graph_properties(
    properties: &OpenGraphProperties,
    channel: ShareChannel,
    require_namespace: bool,
) -> ValidationResult<()> {
    for (key, value) in properties {
        if require_namespace {
            validate_open_graph_key(key)?;
        }
        validate_open_graph_value(value, channel)?;
    }
    Ok(())
}

fn validate_open_graph_value(value: &OpenGraphValue, channel: ShareChannel) -> ValidationResult<()> {
    match value {
        OpenGraphValue::Bool(_)
        | OpenGraphValue::Integer(_)
        | OpenGraphValue::Double(_)
        | OpenGraphValue::String(_) => Ok(()),
        OpenGraphValue::Photo(photo) => validate_photo(photo, channel, PhotoContext::OpenGraph),
        OpenGraphValue::Object(object) => {
            validate_open_graph_properties(object.properties(), channel, true)
        }
        OpenGraphValue::List(values) => values
            .iter()
            .try_for_each(|item| validate_open_graph_value(item, channel)),
    }
}

fn validate_photo_for_web(photo: &SharePhoto) -> ValidationResult<()> {
    match photo.image_url() {
        Some(url) if is_web_url(url) => Ok(()),
        _ => Err(ValidationError::ImageUrlNotOnWeb),
    }
}

fn validate_photo_for_device(photo: &SharePhoto, context: PhotoContext) -> ValidationResult<()> {
    if photo.bitmap().is_some_and(|bitmap| !bitmap.is_empty()) {
        return Ok(());
    }

    let url = photo
        .image_url()
        .ok_or(ValidationError::MissingImageSource)?;

    if context == PhotoContext::Standalone && is_web_url(url) {
        return Err(ValidationError::WebImageNotAllowed(url.to_string()));
    }

    Ok(())
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

fn is_device_url(url: &Url) -> bool {
    matches!(url.scheme(), "file" | "content")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::domain::{Bitmap, ShareOpenGraphObject};
    use rstest::rstest;

    fn url(raw: &str) -> Url {
        Url::parse(raw).expect("test URL should parse")
    }

    #[rstest]
    #[case("og:title")]
    #[case("books:author:name")]
    fn namespaced_keys_are_accepted(#[case] key: &str) {
        assert!(validate_open_graph_key(key).is_ok());
    }

    #[rstest]
    #[case("title")]
    #[case("og:")]
    #[case(":title")]
    #[case("og::title")]
    #[case("")]
    fn keys_without_namespace_are_rejected(#[case] key: &str) {
        assert_eq!(
            validate_open_graph_key(key),
            Err(ValidationError::KeyNotNamespaced(key.to_owned()))
        );
    }

    #[rstest]
    #[case(ShareChannel::Message)]
    #[case(ShareChannel::Native)]
    #[case(ShareChannel::Api)]
    fn device_channels_accept_local_image(#[case] channel: ShareChannel) {
        let photo = SharePhoto::from_url(url("file:///sdcard/cat.png"));
        assert!(validate_photo(&photo, channel, PhotoContext::Standalone).is_ok());
    }

    #[rstest]
    #[case(ShareChannel::Message)]
    #[case(ShareChannel::Native)]
    #[case(ShareChannel::Api)]
    fn device_channels_reject_web_image_outside_open_graph(#[case] channel: ShareChannel) {
        let photo = SharePhoto::from_url(url("https://example.com/cat.gif"));
        assert!(matches!(
            validate_photo(&photo, channel, PhotoContext::Standalone),
            Err(ValidationError::WebImageNotAllowed(_))
        ));
        assert!(validate_photo(&photo, channel, PhotoContext::OpenGraph).is_ok());
    }

    #[rstest]
    fn bitmap_satisfies_device_channels() {
        let photo = SharePhoto::builder()
            .with_bitmap(Bitmap::new(vec![255; 4], 1, 1))
            .with_image_url(url("https://example.com/cat.gif"))
            .build();
        assert!(validate_photo(&photo, ShareChannel::Native, PhotoContext::Standalone).is_ok());
    }

    #[rstest]
    fn empty_bitmap_counts_as_missing() {
        let photo = SharePhoto::builder()
            .with_bitmap(Bitmap::new(Vec::new(), 0, 0))
            .build();
        assert_eq!(
            validate_photo(&photo, ShareChannel::Message, PhotoContext::Standalone),
            Err(ValidationError::MissingImageSource)
        );
    }

    #[rstest]
    #[case(SharePhoto::builder().build())]
    #[case(SharePhoto::from_url(url("file:///sdcard/cat.png")))]
    #[case(SharePhoto::builder().with_bitmap(Bitmap::new(vec![1], 1, 1)).build())]
    fn web_channel_requires_web_image(#[case] photo: SharePhoto) {
        assert_eq!(
            validate_photo(&photo, ShareChannel::Web, PhotoContext::Standalone),
            Err(ValidationError::ImageUrlNotOnWeb)
        );
    }

    #[rstest]
    #[case("file:///sdcard/clip.mp4")]
    #[case("content://media/external/video/42")]
    fn device_videos_are_accepted(#[case] raw: &str) {
        assert!(validate_video(&ShareVideo::new(url(raw))).is_ok());
    }

    #[rstest]
    fn web_video_is_rejected() {
        let video = ShareVideo::new(url("https://example.com/clip.mp4"));
        assert!(matches!(
            validate_video(&video),
            Err(ValidationError::VideoNotOnDevice(_))
        ));
    }

    #[rstest]
    fn unlocated_video_is_rejected() {
        assert_eq!(
            validate_video(&ShareVideo::unlocated()),
            Err(ValidationError::MissingVideoUrl)
        );
    }

    #[rstest]
    fn nested_object_keys_must_be_namespaced() {
        let object = ShareOpenGraphObject::new()
            .with_property("og:type", "books.book")
            .with_property("title", "A Game of Thrones");
        let action = ShareOpenGraphAction::builder()
            .with_action_type("books.reads")
            .put("book", object)
            .build();
        assert_eq!(
            validate_open_graph_action(&action, ShareChannel::Message),
            Err(ValidationError::KeyNotNamespaced("title".to_owned()))
        );
    }

    #[rstest]
    fn photos_inside_lists_are_checked() {
        let action = ShareOpenGraphAction::builder()
            .with_action_type("fitness.runs")
            .put(
                "images",
                OpenGraphValue::List(vec![
                    SharePhoto::from_url(url("https://example.com/a.png")).into(),
                    SharePhoto::builder().build().into(),
                ]),
            )
            .build();
        assert_eq!(
            validate_open_graph_action(&action, ShareChannel::Api),
            Err(ValidationError::MissingImageSource)
        );
    }

    #[rstest]
    fn blank_action_type_is_rejected() {
        let action = ShareOpenGraphAction::builder()
            .with_action_type("  ")
            .build();
        assert_eq!(
            validate_open_graph_action(&action, ShareChannel::Native),
            Err(ValidationError::MissingActionType)
        );
    }
}
