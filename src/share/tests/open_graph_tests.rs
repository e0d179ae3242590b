//! Unit tests for open graph content validation.

use super::fixtures::photo;
use crate::share::{
    domain::{
        OpenGraphValue, ShareChannel, ShareContent, ShareOpenGraphAction, ShareOpenGraphContent,
        ShareOpenGraphObject,
    },
    error::ValidationError,
    validation::{validate_for_channel, validate_for_message},
};
use rstest::rstest;

fn content_with(action: Option<ShareOpenGraphAction>, preview: Option<&str>) -> ShareContent {
    ShareOpenGraphContent::builder()
        .action(action)
        .preview_property_name(preview.map(str::to_owned))
        .build()
        .into()
}

#[rstest]
fn missing_action_fails() {
    let content = content_with(None, Some("book"));
    assert_eq!(
        validate_for_message(Some(&content)),
        Err(ValidationError::MissingAction)
    );
}

#[rstest]
fn missing_action_type_fails() {
    let action = ShareOpenGraphAction::builder().action_type(None).build();
    let content = content_with(Some(action), Some("book"));
    assert_eq!(
        validate_for_message(Some(&content)),
        Err(ValidationError::MissingActionType)
    );
}

#[rstest]
fn missing_preview_property_name_fails() {
    let action = ShareOpenGraphAction::builder()
        .with_action_type("foo")
        .build();
    let content = content_with(Some(action), None);
    assert_eq!(
        validate_for_message(Some(&content)),
        Err(ValidationError::MissingPreviewPropertyName)
    );
}

#[rstest]
fn empty_preview_property_name_fails() {
    let action = ShareOpenGraphAction::builder()
        .with_action_type("foo")
        .put_string("foo", "bar")
        .build();
    let content = content_with(Some(action), Some(""));
    assert_eq!(
        validate_for_message(Some(&content)),
        Err(ValidationError::MissingPreviewPropertyName)
    );
}

#[rstest]
fn preview_property_absent_from_action_fails() {
    let action = ShareOpenGraphAction::builder()
        .with_action_type("books.reads")
        .put_string("book", "https://example.com/books/1")
        .build();
    let content = content_with(Some(action), Some("movie"));
    assert_eq!(
        validate_for_message(Some(&content)),
        Err(ValidationError::PreviewPropertyNotFound("movie".to_owned()))
    );
}

#[rstest]
#[case(ShareChannel::Message)]
#[case(ShareChannel::Native)]
#[case(ShareChannel::Api)]
fn web_photos_are_allowed_inside_open_graph(#[case] channel: ShareChannel) {
    let action = ShareOpenGraphAction::builder()
        .with_action_type("fitness.runs")
        .put("image", photo("https://example.com/route.png"))
        .put("distance", 5.2)
        .put("completed", true)
        .put("laps", 12_i64)
        .build();
    let content = content_with(Some(action), Some("image"));
    assert!(validate_for_channel(Some(&content), channel).is_ok());
}

#[rstest]
fn local_photo_inside_open_graph_fails_by_web() {
    let action = ShareOpenGraphAction::builder()
        .with_action_type("fitness.runs")
        .put("image", photo("file:///sdcard/route.png"))
        .build();
    let content = content_with(Some(action), Some("image"));
    assert_eq!(
        validate_for_channel(Some(&content), ShareChannel::Web),
        Err(ValidationError::ImageUrlNotOnWeb)
    );
}

#[rstest]
fn nested_objects_and_lists_pass() {
    let author = ShareOpenGraphObject::new()
        .with_property("og:type", "books.author")
        .with_property("og:title", "George R. R. Martin");
    let book = ShareOpenGraphObject::new()
        .with_property("og:type", "books.book")
        .with_property("books:author", OpenGraphValue::List(vec![author.into()]))
        .with_property("og:image", photo("https://example.com/cover.png"));
    let action = ShareOpenGraphAction::builder()
        .with_action_type("books.reads")
        .put("book", book)
        .build();
    let content = content_with(Some(action), Some("book"));

    for channel in ShareChannel::ALL {
        assert!(
            validate_for_channel(Some(&content), channel).is_ok(),
            "{channel} should accept nested open graph objects"
        );
    }
}

#[rstest]
fn unnamespaced_key_deep_in_list_fails() {
    let broken = ShareOpenGraphObject::new().with_property("title", "untitled");
    let action = ShareOpenGraphAction::builder()
        .with_action_type("books.reads")
        .put("books", OpenGraphValue::List(vec![broken.into()]))
        .build();
    let content = content_with(Some(action), Some("books"));
    assert_eq!(
        validate_for_message(Some(&content)),
        Err(ValidationError::KeyNotNamespaced("title".to_owned()))
    );
}
