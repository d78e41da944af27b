//! Configuration module for rsw
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RSW_*)
//! 3. Project config (rsw.toml)
//! 4. User config (~/.config/rsw/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{template, user_config_path, CONFIG_FILE};
pub use types::{GlobalConfig, LoggingConfig, WatchConfig};
