//! Crate specification entity
//!
//! A crate is configured either by name alone or by a table with per-crate
//! overrides:
//!
//! ```toml
//! crates = [
//!     "foo",
//!     { name = "@org/bar", profile = "release", extra_args = ["--no-typescript"] },
//! ]
//! ```
//!
//! Both forms deserialize into the same [`CrateSpec`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::value_objects::{CrateName, Profile};

/// Default directory (relative to the crate) wasm-pack publishes into.
pub const DEFAULT_OUT_DIR: &str = "pkg";

/// One buildable crate and its overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrateSpec {
    pub name: CrateName,
    pub profile: Option<Profile>,
    pub target: Option<String>,
    pub mode: Option<String>,
    pub extra_args: Vec<String>,
    pub unwatch: Vec<String>,
    pub out_dir: Option<PathBuf>,
}

impl CrateSpec {
    /// A crate configured by name only.
    pub fn named(name: impl Into<CrateName>) -> Self {
        Self {
            name: name.into(),
            profile: None,
            target: None,
            mode: None,
            extra_args: Vec::new(),
            unwatch: Vec::new(),
            out_dir: None,
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_unwatch<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unwatch = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(out_dir.into());
        self
    }

    /// Crate directory below the crates root.
    pub fn crate_root(&self, root: &Path) -> PathBuf {
        self.name.dir_in(root)
    }

    /// Directory the published package lands in.
    pub fn published_dir(&self, root: &Path) -> PathBuf {
        self.out_dir_in(&self.crate_root(root))
    }

    /// Output directory of a crate living at `crate_root`.
    pub fn out_dir_in(&self, crate_root: &Path) -> PathBuf {
        match &self.out_dir {
            Some(out_dir) => crate_root.join(out_dir),
            None => crate_root.join(DEFAULT_OUT_DIR),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CrateSpecDe {
    Name(String),
    Table {
        name: String,
        #[serde(default)]
        profile: Option<Profile>,
        #[serde(default)]
        target: Option<String>,
        #[serde(default)]
        mode: Option<String>,
        #[serde(default, alias = "extraArgs")]
        extra_args: Vec<String>,
        #[serde(default)]
        unwatch: Vec<String>,
        #[serde(default, alias = "outDir")]
        out_dir: Option<PathBuf>,
    },
}

impl<'de> Deserialize<'de> for CrateSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match CrateSpecDe::deserialize(deserializer)? {
            CrateSpecDe::Name(name) => Ok(Self::named(name)),
            CrateSpecDe::Table {
                name,
                profile,
                target,
                mode,
                extra_args,
                unwatch,
                out_dir,
            } => Ok(Self {
                name: CrateName::new(name),
                profile,
                target,
                mode,
                extra_args,
                unwatch,
                out_dir,
            }),
        }
    }
}
