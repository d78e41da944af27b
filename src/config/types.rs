//! Configuration type definitions

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::entities::CrateSpec;
use crate::domain::services::BuildDefaults;
use crate::domain::value_objects::{CliFlavor, ConfigWarning, Profile};
use crate::error::{RswError, RswResult};

use super::loader;

/// Watch loop tuning
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchConfig {
    /// Pause before relinking after `package.json` changes
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Quiet period before a changed path is routed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Keep at most one build per crate in flight
    #[serde(default = "default_true")]
    pub serialize_builds: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            debounce_ms: default_debounce_ms(),
            serialize_builds: true,
        }
    }
}

impl WatchConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_settle_delay_ms() -> u64 {
    1000
}

fn default_debounce_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// A simple level (`info`, `debug`, ...) or a full `EnvFilter` directive string
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }

    pub(crate) fn normalize_level_directives(input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::default_level();
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "trace" => "trace".to_owned(),
            "debug" => "debug".to_owned(),
            "info" => "info".to_owned(),
            "warn" | "warning" => "warn".to_owned(),
            "error" => "error".to_owned(),
            // Anything else is treated as an `EnvFilter` directive string.
            _ => trimmed.to_owned(),
        }
    }

    /// Level after applying `-v` flags: one step per flag, capped at `trace`.
    pub fn with_verbosity(&self, verbose: u8) -> String {
        let base = Self::normalize_level_directives(&self.level);
        if verbose == 0 {
            return base;
        }
        let raised = match (base.as_str(), verbose) {
            ("trace" | "debug", _) | (_, 2..) => "trace",
            _ => "debug",
        };
        format!("rsw={raised},{base}")
    }

    fn config_env_filter(&self, verbose: u8) -> tracing_subscriber::EnvFilter {
        tracing_subscriber::EnvFilter::try_new(self.with_verbosity(verbose)).unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::default()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        })
    }

    /// Create the effective `EnvFilter`.
    ///
    /// If `RUST_LOG` is set, it is merged into the resulting filter.
    pub fn env_filter(&self, verbose: u8) -> tracing_subscriber::EnvFilter {
        let env_directives = std::env::var("RUST_LOG")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        match env_directives {
            Some(env_directives) => {
                let combined = format!("{},{env_directives}", self.with_verbosity(verbose));
                tracing_subscriber::EnvFilter::try_new(combined)
                    .or_else(|_| tracing_subscriber::EnvFilter::try_new(env_directives))
                    .unwrap_or_else(|_| self.config_env_filter(verbose))
            }
            None => self.config_env_filter(verbose),
        }
    }
}

/// Global configuration (`rsw.toml`)
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalConfig {
    /// Crates root, relative to the project directory
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default)]
    pub cli: CliFlavor,

    #[serde(default)]
    pub profile: Option<Profile>,

    #[serde(default)]
    pub target: Option<String>,

    /// Globs excluded from triggering rebuilds in every crate
    #[serde(default)]
    pub unwatch: Vec<String>,

    /// Package names unlinked once at startup
    #[serde(default, alias = "unLinks")]
    pub unlinks: Vec<String>,

    #[serde(default)]
    pub crates: Vec<CrateSpec>,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub log: LoggingConfig,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            cli: CliFlavor::default(),
            profile: None,
            target: None,
            unwatch: Vec::new(),
            unlinks: Vec::new(),
            crates: Vec::new(),
            watch: WatchConfig::default(),
            log: LoggingConfig::default(),
        }
    }
}

impl GlobalConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RswResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RswResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: &Path) -> RswResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (RSW_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Defaults every crate's build falls back to.
    pub fn build_defaults(&self) -> BuildDefaults {
        BuildDefaults {
            profile: self.profile,
            target: self.target.clone(),
        }
    }

    /// Absolute crates root for the given project directory.
    pub fn crates_root(&self, project_root: &Path) -> PathBuf {
        if self.root.is_absolute() {
            self.root.clone()
        } else {
            project_root.join(&self.root)
        }
    }

    /// Reject configurations that name a crate twice.
    pub fn validate(&self) -> RswResult<()> {
        let mut seen = HashSet::new();
        for spec in &self.crates {
            if !seen.insert(spec.name.as_str()) {
                return Err(RswError::DuplicateCrate {
                    name: spec.name.to_string(),
                });
            }
        }
        Ok(())
    }
}
