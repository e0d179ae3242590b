//! Adapter implementations of the share ports.

pub mod memory;

pub use memory::InMemoryShareSink;
