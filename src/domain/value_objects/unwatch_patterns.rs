//! Unwatch patterns value object
//!
//! Paths matching these globs never trigger a rebuild. Matching uses gitignore
//! semantics relative to the crate directory.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::path::{Path, PathBuf};

/// Compiled unwatch globs for one crate.
#[derive(Debug)]
pub struct UnwatchPatterns {
    root: PathBuf,
    matcher: Gitignore,
    patterns: Vec<String>,
}

impl UnwatchPatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            matcher: Gitignore::empty(),
            patterns: Vec::new(),
        }
    }

    /// Compile the given globs rooted at `root`.
    pub fn new<I, S>(root: &Path, patterns: I) -> Result<Self, UnwatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GitignoreBuilder::new(root);
        let mut kept = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() || pattern.starts_with('#') {
                continue;
            }
            builder
                .add_line(None, pattern)
                .map_err(|e| UnwatchError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
            kept.push(pattern.to_string());
        }

        let matcher = builder
            .build()
            .map_err(|e| UnwatchError::InvalidPattern {
                pattern: kept.join(", "),
                message: e.to_string(),
            })?;

        Ok(Self {
            root: root.to_path_buf(),
            matcher,
            patterns: kept,
        })
    }

    /// Check whether a changed path is excluded.
    ///
    /// Paths outside the root are never excluded.
    pub fn is_unwatched(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let Ok(rel) = path.strip_prefix(&self.root) else {
            return false;
        };
        if rel.as_os_str().is_empty() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel, path.is_dir())
            .is_ignore()
    }

    /// Patterns rendered against the crate root, for display.
    pub fn display_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .map(|p| self.root.join(p).display().to_string())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Errors that can occur when compiling unwatch globs.
#[derive(Debug)]
pub enum UnwatchError {
    InvalidPattern { pattern: String, message: String },
}

impl fmt::Display for UnwatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnwatchError::InvalidPattern { pattern, message } => {
                write!(f, "invalid unwatch pattern '{}': {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for UnwatchError {}
