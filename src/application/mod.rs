//! Application Layer
//!
//! The engine that decides when crates are rebuilt and relinked.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Talks to processes and transports only through domain ports
//! - Is driven by the command layer
//!
//! ## Components
//!
//! - `BuildInvoker` - Runs wasm-pack for one crate, blocking or on a worker thread
//! - `LinkManager` - Keeps the package manager's link registry in sync
//! - `ChangeRouter` - Routes changed paths to builds and link passes
//! - `DevServerNotifier` - Forwards build results to the dev server
//! - `WatchUseCase` - Filesystem watch loop feeding the router

pub mod build;
pub mod link;
pub mod notifier;
pub mod router;
pub mod watch;

#[cfg(test)]
pub(crate) mod fakes;

pub use build::{BuildCompletion, BuildInvoker, BuildMode, BuildOutcome};
pub use link::{LinkManager, LinkOutcome, LinkRequest, LinkTable};
pub use notifier::{DevServerNotifier, PLUGIN_ID};
pub use router::{ChangeRouter, Route, RouteOutcome};
pub use watch::{WatchEvent, WatchOptions, WatchUseCase};
