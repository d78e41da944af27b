//! Watch event types and options

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::application::router::RouteOutcome;
use crate::config::WatchConfig;
use crate::domain::value_objects::CrateName;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

/// Quiet period after registering the watcher; events in it are dropped
pub const STARTUP_COOLDOWN_MS: u64 = 500;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Quiet period before a changed path is routed
    pub debounce: Duration,
    /// Initial events drained after the watcher starts
    pub cooldown: Duration,
    /// How long one loop iteration waits for filesystem events
    pub poll_interval: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEBOUNCE_MS),
            cooldown: Duration::from_millis(STARTUP_COOLDOWN_MS),
            poll_interval: Duration::from_millis(50),
        }
    }
}

impl WatchOptions {
    pub fn from_config(config: &WatchConfig) -> Self {
        Self {
            debounce: config.debounce(),
            ..Self::default()
        }
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }
}

/// Progress of the watch loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Watcher registered
    WatchStarted {
        watching: Vec<PathBuf>,
        unwatched: Vec<String>,
    },
    /// A debounced change with new content
    FileChanged { path: PathBuf },
    /// The package descriptor's dependencies moved and links were refreshed
    Relinked,
    /// Async builds dispatched for a change
    BuildsStarted {
        started: Vec<CrateName>,
        deferred: Vec<CrateName>,
    },
    /// An async build completed
    BuildFinished { crate_name: CrateName, ok: bool },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Event describing how a change was routed, if anything happened.
    pub fn from_outcome(outcome: RouteOutcome) -> Option<Self> {
        match outcome {
            RouteOutcome::Relinked => Some(Self::Relinked),
            RouteOutcome::Built { started, deferred } => {
                Some(Self::BuildsStarted { started, deferred })
            }
            RouteOutcome::DependenciesUnchanged | RouteOutcome::Ignored => None,
        }
    }
}

/// Watcher state for debouncing
#[derive(Debug)]
pub struct WatcherState {
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
    debounce: Duration,
}

impl Default for WatcherState {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }
}

impl WatcherState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            pending_changes: HashSet::new(),
            last_change: None,
            debounce,
        }
    }

    /// Add a file change to pending changes
    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    /// Check if debounce period has passed and we have pending changes
    pub fn should_flush(&self) -> bool {
        match self.last_change {
            Some(last) => !self.pending_changes.is_empty() && last.elapsed() >= self.debounce,
            None => false,
        }
    }

    /// Take all pending changes in path order, resetting state
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        let mut changes: Vec<_> = self.pending_changes.drain().collect();
        changes.sort();
        self.last_change = None;
        changes
    }

    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}
