//! Sharecheck: share content validation for social platform integrations.
//!
//! This crate provides the content records a host application builds
//! before sharing to a social platform, and the rules each sharing channel
//! (in-app message, native application, web dialog, platform API) applies
//! to them before a share is attempted.
//!
//! # Architecture
//!
//! Sharecheck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure content types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for validation and dispatch
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`share`]: Share content model, channel validation, and dispatch

pub mod share;
