//! Content hashes of watched files
//!
//! Editors touch files without changing them (auto-save, format-on-save with
//! no diff). Only events whose content differs from the last observation are
//! routed.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use sha2::{Digest, Sha256};

#[derive(Debug, Default)]
pub struct ContentHashCache {
    hashes: HashMap<PathBuf, String>,
}

impl ContentHashCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every file below `roots` so untouched files are not reported
    /// when the watcher replays them.
    pub fn seed<'a>(&mut self, roots: impl IntoIterator<Item = &'a PathBuf>) {
        for root in roots {
            let walker = WalkBuilder::new(root).standard_filters(false).build();
            for dent in walker.flatten() {
                if dent.file_type().is_some_and(|t| t.is_file()) {
                    self.observe(dent.path());
                }
            }
        }
    }

    /// Record the current content of `path`. Returns whether it differs
    /// from the previous observation. Unreadable paths (deleted files,
    /// directories) always count as changed.
    pub fn observe(&mut self, path: &Path) -> bool {
        let Ok(bytes) = fs::read(path) else {
            self.hashes.remove(path);
            return true;
        };
        let hash = compute_content_hash(&bytes);
        match self.hashes.insert(path.to_path_buf(), hash.clone()) {
            Some(previous) => previous != hash,
            None => true,
        }
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

/// SHA-256 of `content`, hex encoded
pub fn compute_content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}
