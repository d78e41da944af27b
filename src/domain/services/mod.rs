//! Domain Services
//!
//! Stateless operations over configuration and the filesystem's timestamps.

pub mod command_line;
mod invocation;
mod mtime;

pub use invocation::{BuildDefaults, BuildInvocation, BUILD_TOOL, DEFAULT_TARGET};
pub use mtime::{check_mtime, freshness, Freshness, StaleCheckEntry, StaleReason};
