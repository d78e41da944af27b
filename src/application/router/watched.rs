//! A configured crate resolved against the filesystem

use std::path::{Component, Path, PathBuf};

use crate::domain::entities::CrateSpec;
use crate::domain::services::StaleCheckEntry;
use crate::domain::value_objects::UnwatchPatterns;
use crate::error::RswResult;
use crate::infrastructure::manifest;

const MANIFEST: &str = "Cargo.toml";
const SOURCE_DIR: &str = "src";
const TARGET_DIR: &str = "target";

/// Paths the router needs to attribute changes to one crate.
#[derive(Debug)]
pub struct WatchedCrate {
    pub spec: CrateSpec,
    pub root: PathBuf,
    pub source_dir: PathBuf,
    pub manifest: PathBuf,
    pub out_dir: PathBuf,
    /// Roots of local path dependencies
    pub dependencies: Vec<PathBuf>,
    pub unwatch: UnwatchPatterns,
}

impl WatchedCrate {
    /// Resolve `spec` below `crates_root`, reading its manifest for path
    /// dependencies. `global_unwatch` applies in addition to the crate's own
    /// globs.
    pub fn resolve(spec: CrateSpec, crates_root: &Path, global_unwatch: &[String]) -> RswResult<Self> {
        let root = normalize(&spec.crate_root(crates_root));
        let manifest = root.join(MANIFEST);
        let dependencies = manifest::local_path_dependencies(&manifest)?
            .iter()
            .map(|dep| normalize(dep))
            .collect();
        let unwatch = UnwatchPatterns::new(&root, global_unwatch.iter().chain(&spec.unwatch))?;

        Ok(Self {
            source_dir: root.join(SOURCE_DIR),
            out_dir: normalize(&spec.out_dir_in(&root)),
            spec,
            root,
            manifest,
            dependencies,
            unwatch,
        })
    }

    pub fn stale_check(&self) -> StaleCheckEntry {
        StaleCheckEntry {
            source_dir: self.source_dir.clone(),
            manifest_path: self.manifest.clone(),
            published_descriptor: self.out_dir.join("package.json"),
        }
    }

    /// Source directories and manifests of the crate and its path
    /// dependencies.
    pub fn watch_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.source_dir.clone(), self.manifest.clone()];
        for dep in &self.dependencies {
            paths.push(dep.join(SOURCE_DIR));
            paths.push(dep.join(MANIFEST));
        }
        paths
    }

    /// Build output of the crate itself.
    pub fn is_output(&self, path: &Path) -> bool {
        path.starts_with(&self.out_dir) || path.starts_with(self.root.join(TARGET_DIR))
    }

    /// Whether a change at `path` should rebuild this crate.
    pub fn owns(&self, path: &Path) -> bool {
        if self.is_output(path) || self.unwatch.is_unwatched(path) {
            return false;
        }
        self.watch_paths().iter().any(|watched| {
            if watched.ends_with(MANIFEST) {
                path == watched
            } else {
                path.starts_with(watched)
            }
        })
    }
}

/// Canonical form of `dir`, or its lexical normalization while it does not
/// exist yet. Watcher events carry canonical paths.
pub(crate) fn resolve_dir(dir: &Path) -> PathBuf {
    dir.canonicalize().unwrap_or_else(|_| normalize(dir))
}

/// Resolve `.` and `..` lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}
