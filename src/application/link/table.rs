//! Link table: published package name to output directory

use std::path::{Path, PathBuf};

/// Packages exposed through the package manager's link registry.
///
/// Entries keep configuration order. Inserting an existing name replaces its
/// directory in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTable {
    entries: Vec<(String, PathBuf)>,
}

impl LinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, dir: impl Into<PathBuf>) {
        let name = name.into();
        let dir = dir.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = dir,
            None => self.entries.push((name, dir)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, dir)| dir.as_path())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|(_, dir)| dir.as_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, dir)| (name.as_str(), dir.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
