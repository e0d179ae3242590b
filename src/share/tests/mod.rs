//! Unit tests for the share module.
//!
//! Tests are organised by concern, covering happy paths, error cases,
//! and edge cases for all public APIs.

mod open_graph_tests;
