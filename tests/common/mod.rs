//! Common test utilities for rsw scenario and CLI tests.
//!
//! This module provides:
//! - `TestProject`: a host project in a temp directory with crate skeletons
//! - `ScriptedRunner` / `RecordingTransport`: fakes for the process and
//!   dev-server ports
//! - Fixtures: reusable manifest and descriptor content

#![allow(dead_code)]

pub mod env;
pub mod fakes;
pub mod fixtures;

pub use env::*;
pub use fakes::*;
pub use fixtures::*;
