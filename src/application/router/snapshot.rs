//! Last-seen dependency set of the host package descriptor

use crate::infrastructure::package_json::MergedDependencies;

/// Owned by one router; independent routers never share it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySnapshot {
    last: Option<MergedDependencies>,
}

impl DependencySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_seeded(&self) -> bool {
        self.last.is_some()
    }

    /// Whether `deps` differs from the recorded set. An empty snapshot
    /// differs from everything.
    pub fn differs(&self, deps: &MergedDependencies) -> bool {
        self.last.as_ref() != Some(deps)
    }

    pub fn replace(&mut self, deps: MergedDependencies) {
        self.last = Some(deps);
    }
}
