//! Share content model and per-channel validation.
//!
//! This module implements the content records a host application builds
//! before sharing to a social platform, the rules each sharing channel
//! applies to them, and a service that hands validated content to a sink.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure content types ([`domain::ShareContent`], [`domain::SharePhoto`], [`domain::ShareChannel`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::validator::ShareContentValidator`], [`ports::sink::ShareSink`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryShareSink`])
//! - **Validation**: Channel rules enforced before content leaves the application
//! - **Services**: Validation-then-dispatch orchestration ([`services::ShareService`])
//!
//! # Example
//!
//! ```
//! use sharecheck::share::domain::{
//!     ShareContent, ShareOpenGraphAction, ShareOpenGraphContent,
//! };
//! use sharecheck::share::validation::{validate_for_message, validate_for_web_share};
//!
//! let action = ShareOpenGraphAction::builder()
//!     .with_action_type("books.reads")
//!     .put_string("book", "https://example.com/books/1")
//!     .build();
//! let content: ShareContent = ShareOpenGraphContent::builder()
//!     .with_action(action)
//!     .with_preview_property_name("book")
//!     .build()
//!     .into();
//!
//! validate_for_message(Some(&content)).expect("valid for message");
//! validate_for_web_share(Some(&content)).expect("valid for web");
//! assert!(validate_for_message(None).is_err());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
