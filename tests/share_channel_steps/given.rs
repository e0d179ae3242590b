//! Given steps for share channel BDD scenarios.

use super::world::ShareWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use sharecheck::share::domain::{
    ShareOpenGraphAction, ShareOpenGraphContent, SharePhoto, SharePhotoContent, ShareVideoContent,
};
use url::Url;

#[given("no share content")]
fn no_share_content(world: &mut ShareWorld) {
    world.content = None;
}

#[given("photo content with {count:usize} web photos")]
fn photo_content_with_web_photos(world: &mut ShareWorld, count: usize) -> Result<(), eyre::Report> {
    let mut builder = SharePhotoContent::builder();
    for index in 1..=count {
        let url = Url::parse(&format!("https://example.com/awesome-{index}.gif"))
            .wrap_err("parse photo URL")?;
        builder = builder.add_photo(SharePhoto::from_url(url));
    }
    world.content = Some(builder.build().into());
    Ok(())
}

#[given("video content without a preview photo")]
fn video_without_preview(world: &mut ShareWorld) {
    world.content = Some(ShareVideoContent::builder().build().into());
}

#[given("well-formed open graph content")]
fn well_formed_open_graph(world: &mut ShareWorld) {
    let action = ShareOpenGraphAction::builder()
        .put_string("foo", "fooValue")
        .with_action_type("foo")
        .build();
    world.content = Some(
        ShareOpenGraphContent::builder()
            .with_preview_property_name("foo")
            .with_action(action)
            .build()
            .into(),
    );
}
