//! Integration test utilities for the tagchat server
//!
//! Provides helpers for running end-to-end tests against the REST API.
//! Test servers use the in-memory storage backing, so no external
//! services are required.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
