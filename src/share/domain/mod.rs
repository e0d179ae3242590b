//! Domain types for share content.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are immutable after construction and serialisable via serde.

mod channel;
mod content;
mod ids;
mod link;
mod media;
mod open_graph;
mod photo;
mod request;
mod video;

pub use channel::{ParseShareChannelError, ShareChannel};
pub use content::{ContentKind, ShareContent};
pub use ids::ShareId;
pub use link::{ShareLinkContent, ShareLinkContentBuilder};
pub use media::{ShareCameraEffectContent, ShareMediaContent, ShareMedium};
pub use open_graph::{
    OpenGraphProperties, OpenGraphValue, ShareOpenGraphAction, ShareOpenGraphActionBuilder,
    ShareOpenGraphContent, ShareOpenGraphContentBuilder, ShareOpenGraphObject,
};
pub use photo::{Bitmap, SharePhoto, SharePhotoBuilder, SharePhotoContent, SharePhotoContentBuilder};
pub use request::ShareRequest;
pub use video::{ShareVideo, ShareVideoContent, ShareVideoContentBuilder};
