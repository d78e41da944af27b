use std::path::{Path, PathBuf};

use rsw::config::CONFIG_FILE;
use rsw::infrastructure::package_json::PACKAGE_JSON;

/// Discover the host project directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `rsw.toml`
/// - `package.json`
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
    }
    for dir in start.ancestors() {
        if dir.join(PACKAGE_JSON).is_file() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
