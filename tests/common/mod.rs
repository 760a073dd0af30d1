#![allow(dead_code)]
//! Shared test utilities for integration tests.
//!
//! - `fixtures`: fixture manifest paths and loaded resolvers

pub mod fixtures;

pub use fixtures::{fixture_path, fixture_resolver, FIXTURE_JSON, FIXTURE_YAML};
