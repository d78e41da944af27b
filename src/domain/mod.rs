//! Domain Layer
//!
//! Pure build-orchestration logic without process or watcher dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Crate specifications resolved from configuration
//! - `value_objects/` - Immutable value types (CrateName, Profile, CliFlavor, UnwatchPatterns)
//! - `services/` - Build invocation derivation and modification-time freshness checks
//! - `ports/` - Interface definitions for the external collaborators
//!
//! ## Design Principles
//!
//! 1. **No subprocesses** - This layer never spawns the build tool or package manager
//! 2. **Pure Functions** - Argument derivation is a function of configuration alone
//! 3. **Ports & Adapters** - All external collaborators go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
