//! Watch Use Case implementation

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::time::Instant;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::build::BuildOutcome;
use crate::application::router::{ChangeRouter, Route};
use crate::error::RswResult;

use super::cache::ContentHashCache;
use super::event::{WatchEvent, WatchOptions, WatcherState};

/// Watch Use Case
///
/// Feeds debounced, content-filtered filesystem changes into a
/// [`ChangeRouter`] and forwards its build completions. This is the main
/// entry point for the `rsw watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(options: WatchOptions) -> Self {
        Self { options }
    }

    /// Start watching (blocking)
    ///
    /// Runs until `running` is cleared. The startup pass must already have
    /// run on `router`. Returns early only when routing fails (a malformed
    /// package descriptor) or the watcher cannot be registered.
    pub fn start<F>(
        &self,
        router: &mut ChangeRouter,
        running: Arc<AtomicBool>,
        on_event: F,
    ) -> RswResult<()>
    where
        F: Fn(WatchEvent),
    {
        let roots = router.watch_roots();
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| match res {
                Ok(event) => {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
                Err(e) => tracing::warn!("watch error: {e}"),
            },
            Config::default(),
        )?;
        for (target, mode) in registrations(&roots) {
            tracing::debug!(path = %target.display(), ?mode, "watching");
            watcher.watch(&target, mode)?;
        }

        on_event(WatchEvent::WatchStarted {
            watching: roots.clone(),
            unwatched: router.unwatched(),
        });

        let mut hashes = ContentHashCache::new();
        hashes.seed(&roots);

        // notify may replay existing files right after registration
        let cooldown_end = Instant::now() + self.options.cooldown;
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(self.options.poll_interval);
        }

        let mut state = WatcherState::new(self.options.debounce);
        while running.load(Ordering::SeqCst) {
            self.poll(&rx, router, &mut hashes, &mut state);

            if state.should_flush() {
                for path in state.take_changes() {
                    on_event(WatchEvent::FileChanged { path: path.clone() });
                    if let Some(event) = WatchEvent::from_outcome(router.handle_change(&path)?) {
                        on_event(event);
                    }
                }
            }

            for completion in router.drain_completions() {
                on_event(WatchEvent::BuildFinished {
                    ok: completion.outcome == BuildOutcome::Succeeded,
                    crate_name: completion.crate_name,
                });
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    /// Move at most one raw event into the debounce state.
    fn poll(
        &self,
        rx: &Receiver<PathBuf>,
        router: &ChangeRouter,
        hashes: &mut ContentHashCache,
        state: &mut WatcherState,
    ) {
        let Ok(path) = rx.recv_timeout(self.options.poll_interval) else {
            return;
        };
        let path = path.canonicalize().unwrap_or(path);
        if router.classify(&path) == Route::Ignored {
            return;
        }
        if hashes.observe(&path) {
            state.add_change(path);
        } else {
            tracing::trace!(path = %path.display(), "content unchanged");
        }
    }
}

/// Directories are watched recursively. Files are watched through their
/// parent directory so atomic saves (write to temp, rename over) are seen.
pub(super) fn registrations(roots: &[PathBuf]) -> Vec<(PathBuf, RecursiveMode)> {
    let mut recursive = BTreeSet::new();
    let mut parents = BTreeSet::new();
    for root in roots {
        if root.is_dir() {
            recursive.insert(root.clone());
        } else if let Some(parent) = root.parent().filter(|p| p.is_dir()) {
            parents.insert(parent.to_path_buf());
        } else {
            tracing::debug!(path = %root.display(), "not watching missing path");
        }
    }

    let covered = |dir: &Path| recursive.iter().any(|r| dir.starts_with(r));
    let mut out: Vec<_> = recursive
        .iter()
        .map(|dir| (dir.clone(), RecursiveMode::Recursive))
        .collect();
    out.extend(
        parents
            .into_iter()
            .filter(|dir| !covered(dir))
            .map(|dir| (dir, RecursiveMode::NonRecursive)),
    );
    out
}
