//! Testing infrastructure for wsrecall integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated environment with a config file for CLI runs
//! - `fixtures`: editor app-data directories with legacy and database history
//! - `logger`: a `Logger` that records every call

pub mod fixtures;
pub mod logger;
pub mod world;

pub use fixtures::AppDataFixture;
pub use logger::{LogRecord, RecordingLogger};
pub use world::TestWorld;
