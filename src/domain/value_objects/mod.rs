//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cli_flavor;
mod config_warning;
mod crate_name;
mod profile;
mod unwatch_patterns;

pub use cli_flavor::CliFlavor;
pub use config_warning::ConfigWarning;
pub use crate_name::{CrateName, SCOPE_SEPARATOR};
pub use profile::Profile;
pub use unwatch_patterns::{UnwatchError, UnwatchPatterns};
