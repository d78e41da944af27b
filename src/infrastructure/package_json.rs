//! Host project package descriptor reader

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{RswError, RswResult};

/// Package descriptor file name
pub const PACKAGE_JSON: &str = "package.json";

/// `dependencies` merged with `devDependencies`; dev entries win on conflict.
pub type MergedDependencies = BTreeMap<String, Value>;

/// Read the merged dependency set of a package descriptor.
///
/// Content that is not a JSON object is a configuration error.
pub fn read_merged_dependencies(path: &Path) -> RswResult<MergedDependencies> {
    let content = fs::read_to_string(path)?;
    parse_merged_dependencies(path, &content)
}

pub(crate) fn parse_merged_dependencies(path: &Path, content: &str) -> RswResult<MergedDependencies> {
    let malformed = |message: String| RswError::PackageJson {
        path: path.to_path_buf(),
        message,
    };

    let json: Value = serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;
    let Value::Object(root) = json else {
        return Err(malformed("expected a JSON object".to_string()));
    };

    let mut merged = MergedDependencies::new();
    for section in ["dependencies", "devDependencies"] {
        if let Some(Value::Object(deps)) = root.get(section) {
            merged.extend(deps.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
    Ok(merged)
}
