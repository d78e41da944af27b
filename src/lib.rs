//! rsw - wasm-pack build orchestrator
//!
//! rsw keeps a set of Rust crates built with wasm-pack and linked into a
//! JavaScript project through the package manager's link registry. It
//! rebuilds crates when their sources change, relinks them when the host
//! project's dependencies change, and reports build failures to a dev
//! server without stopping.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    BuildInvoker, BuildMode, ChangeRouter, DevServerNotifier, LinkManager, LinkRequest, LinkTable,
    RouteOutcome, WatchOptions, WatchUseCase,
};
pub use config::GlobalConfig;
pub use domain::entities::CrateSpec;
pub use domain::value_objects::{CliFlavor, CrateName, Profile};
pub use error::{RswError, RswResult};
