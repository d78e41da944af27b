//! Per-crate build serialization
//!
//! At most one build per crate is in flight. Changes arriving meanwhile
//! collapse into a single pending trigger (the latest path wins), dispatched
//! when the running build completes.

use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct BuildQueue {
    /// Crate index -> pending trigger of a follow-up build
    running: HashMap<usize, Option<PathBuf>>,
}

impl BuildQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change. Returns the trigger to build now, or `None` when
    /// the change was deferred behind a running build.
    pub fn request(&mut self, crate_index: usize, trigger: PathBuf) -> Option<PathBuf> {
        match self.running.get_mut(&crate_index) {
            Some(pending) => {
                *pending = Some(trigger);
                None
            }
            None => {
                self.running.insert(crate_index, None);
                Some(trigger)
            }
        }
    }

    /// Record a completion. Returns the trigger of the follow-up build, if
    /// one was deferred; the crate then stays marked as running.
    pub fn finish(&mut self, crate_index: usize) -> Option<PathBuf> {
        let next = self.running.get_mut(&crate_index)?.take();
        if next.is_none() {
            self.running.remove(&crate_index);
        }
        next
    }

    pub fn is_running(&self, crate_index: usize) -> bool {
        self.running.contains_key(&crate_index)
    }

    pub fn has_pending(&self, crate_index: usize) -> bool {
        matches!(self.running.get(&crate_index), Some(Some(_)))
    }
}
