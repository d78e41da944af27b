//! Crate manifest reader
//!
//! Finds local path dependencies so edits to a sibling crate rebuild the
//! crates that depend on it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{RswError, RswResult};

const DEPENDENCY_TABLES: [&str; 3] = ["dependencies", "dev-dependencies", "build-dependencies"];

/// Directories of dependencies declared with `path = "..."`, resolved
/// against the manifest's directory. A missing manifest has no dependencies.
pub fn local_path_dependencies(manifest_path: &Path) -> RswResult<Vec<PathBuf>> {
    let content = match fs::read_to_string(manifest_path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let manifest: toml::Table = toml::from_str(&content).map_err(|e| RswError::Manifest {
        path: manifest_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let mut deps = Vec::new();
    for table in DEPENDENCY_TABLES {
        let Some(entries) = manifest.get(table).and_then(|t| t.as_table()) else {
            continue;
        };
        for spec in entries.values() {
            if let Some(path) = spec.get("path").and_then(|p| p.as_str()) {
                let dir = base.join(path);
                if !deps.contains(&dir) {
                    deps.push(dir);
                }
            }
        }
    }
    Ok(deps)
}
