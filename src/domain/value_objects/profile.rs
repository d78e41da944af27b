//! Build profile value object
//!
//! Mirrors wasm-pack's `--dev`, `--release` and `--profiling` switches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// wasm-pack build profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Fast, unoptimized build with debug assertions
    #[default]
    Dev,
    /// Optimized build
    Release,
    /// Optimized build with debug info
    Profiling,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Dev, Profile::Release, Profile::Profiling];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Dev => "dev",
            Profile::Release => "release",
            Profile::Profiling => "profiling",
        }
    }

    /// Command-line switch understood by wasm-pack.
    pub fn flag(&self) -> &'static str {
        match self {
            Profile::Dev => "--dev",
            Profile::Release => "--release",
            Profile::Profiling => "--profiling",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "debug" => Ok(Profile::Dev),
            "release" => Ok(Profile::Release),
            "profiling" => Ok(Profile::Profiling),
            other => Err(format!(
                "unknown profile '{other}' (expected dev, release or profiling)"
            )),
        }
    }
}
