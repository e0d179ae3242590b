//! Share content validation implementation.
//!
//! This module provides the per-content validation rules and the channel
//! validator that dispatches to them.

pub mod rules;
pub mod service;

pub use rules::PhotoContext;
pub use service::{
    ChannelValidator, validate_for_api_share, validate_for_channel, validate_for_message,
    validate_for_native_share, validate_for_web_share,
};
