//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{CliFlavor, ConfigWarning, Profile};
use crate::error::{RswError, RswResult};

use super::types::GlobalConfig;

/// Project configuration file name
pub const CONFIG_FILE: &str = "rsw.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RswResult<(GlobalConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(path, &content)
}

pub(crate) fn parse_with_warnings(
    path: &Path,
    content: &str,
) -> RswResult<(GlobalConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: GlobalConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RswError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.validate()?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let (section, key) = path_str.rsplit_once('.').unwrap_or(("", path_str.as_str()));
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: find_line_number(content, section, key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// Unlike a missing file, a config that exists but fails to parse is an error.
/// Environment overrides are not applied here; see [`with_env_overrides`].
pub fn load_or_default(project_root: &Path) -> RswResult<(GlobalConfig, Vec<ConfigWarning>)> {
    let project_config = project_root.join(CONFIG_FILE);
    if project_config.exists() {
        return load_with_warnings(&project_config);
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            return load_with_warnings(&user_config);
        }
    }

    Ok((GlobalConfig::default(), Vec::new()))
}

/// `~/.config/rsw/config.toml` (or the platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rsw").join("config.toml"))
}

/// Apply environment variable overrides (RSW_* prefix)
pub fn with_env_overrides(config: GlobalConfig) -> GlobalConfig {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides(
    mut config: GlobalConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> GlobalConfig {
    // RSW_CLI
    if let Some(value) = lookup("RSW_CLI") {
        match value.parse::<CliFlavor>() {
            Ok(cli) => config.cli = cli,
            Err(e) => tracing::warn!("ignoring RSW_CLI: {e}"),
        }
    }

    // RSW_PROFILE
    if let Some(value) = lookup("RSW_PROFILE") {
        match value.parse::<Profile>() {
            Ok(profile) => config.profile = Some(profile),
            Err(e) => tracing::warn!("ignoring RSW_PROFILE: {e}"),
        }
    }

    // RSW_TARGET
    if let Some(value) = lookup("RSW_TARGET") {
        let value = value.trim();
        if !value.is_empty() {
            config.target = Some(value.to_string());
        }
    }

    // RSW_LOG
    if let Some(value) = lookup("RSW_LOG") {
        if !value.trim().is_empty() {
            config.log.level = value;
        }
    }

    config
}

/// Commented starter configuration written by `rsw init`.
pub fn template() -> &'static str {
    r#"# rsw.toml - wasm-pack crates built and linked by rsw

# Directory containing the crates, relative to this file
root = "."

# Package manager used for `link` / `unlink`: npm | yarn | pnpm
cli = "npm"

# Default build profile (dev | release | profiling) and target
# profile = "dev"
# target = "web"

# Globs that never trigger a rebuild, relative to each crate
unwatch = []

# Packages to unlink once at startup (e.g. crates removed from `crates`)
unlinks = []

# Crates: a name, or a table with per-crate overrides
crates = [
    # "my-crate",
    # { name = "@my-scope/my-crate", profile = "release", target = "bundler", mode = "normal", extra_args = [], unwatch = ["*.md"], out_dir = "pkg" },
]

[watch]
settle_delay_ms = 1000
debounce_ms = 100
serialize_builds = true

[log]
level = "info"
"#
}

/// Line of the first `key = ...` assignment inside `section` (dotted table
/// path, empty for the top level).
fn find_line_number(content: &str, section: &str, key: &str) -> Option<usize> {
    let mut current = String::new();
    for (i, line) in content.lines().enumerate() {
        let line = line.trim_start();
        if let Some(header) = line.strip_prefix('[') {
            if let Some((name, _)) = header.trim_start_matches('[').split_once(']') {
                current = name.trim().to_string();
                continue;
            }
        }
        if current != section {
            continue;
        }
        let assigned = line
            .strip_prefix(key)
            .or_else(|| line.strip_prefix(&format!("\"{key}\"")))
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if assigned {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "root",
        "cli",
        "profile",
        "target",
        "unwatch",
        "unlinks",
        "crates",
        "watch",
        "settle_delay_ms",
        "debounce_ms",
        "serialize_builds",
        "log",
        "level",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
