//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer spawns processes and reads project files.
//!
//! ## Structure
//!
//! - `process` - Child-process runner for wasm-pack and the package manager
//! - `events/` - Dev-server transports (NDJSON)
//! - `rustc_errors` - Compiler diagnostic condensing
//! - `manifest` / `package_json` - Readers for crate manifests and the host descriptor

pub mod events;
pub mod manifest;
pub mod package_json;
pub mod process;
pub mod rustc_errors;

// Re-export for convenience
pub use events::JsonEventTransport;
pub use process::ProcessRunner;
pub use rustc_errors::RustcErrorParser;
