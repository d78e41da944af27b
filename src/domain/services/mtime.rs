//! Modification-time freshness check
//!
//! A crate's published package is fresh when its `package.json` is at least
//! as new as every file under the crate's source directory and its manifest.
//! Used only by the startup pass; a live change event is itself proof of
//! staleness.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use ignore::WalkBuilder;

/// Paths consulted for one crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleCheckEntry {
    pub source_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub published_descriptor: PathBuf,
}

/// Why a crate needs rebuilding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReason {
    /// No published descriptor exists yet
    MissingDescriptor,
    /// A source or manifest file is newer than the descriptor
    NewerSource(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale(StaleReason),
}

impl Freshness {
    pub fn is_stale(&self) -> bool {
        matches!(self, Freshness::Stale(_))
    }
}

/// Compare source and manifest modification times against the descriptor.
pub fn freshness(entry: &StaleCheckEntry) -> Freshness {
    let Some(published) = modified(&entry.published_descriptor) else {
        return Freshness::Stale(StaleReason::MissingDescriptor);
    };

    if let Some(manifest) = modified(&entry.manifest_path) {
        if manifest > published {
            return Freshness::Stale(StaleReason::NewerSource(entry.manifest_path.clone()));
        }
    }

    // Hidden and ignored files count too: any edit under src/ invalidates the build.
    let walker = WalkBuilder::new(&entry.source_dir)
        .standard_filters(false)
        .build();
    for dent in walker.flatten() {
        if !dent.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if let Some(mtime) = modified(dent.path()) {
            if mtime > published {
                return Freshness::Stale(StaleReason::NewerSource(dent.path().to_path_buf()));
            }
        }
    }

    Freshness::Fresh
}

/// Run `on_stale` when the crate needs a build, `on_fresh` otherwise.
pub fn check_mtime<R>(
    entry: &StaleCheckEntry,
    on_stale: impl FnOnce(StaleReason) -> R,
    on_fresh: impl FnOnce() -> R,
) -> R {
    match freshness(entry) {
        Freshness::Stale(reason) => on_stale(reason),
        Freshness::Fresh => on_fresh(),
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}
