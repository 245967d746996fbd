//! Testing infrastructure for jespool integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative archive setup
//! - `fixtures`: Sample jobs and spool files

pub mod fixtures;
pub mod world;

pub use world::TestWorld;
