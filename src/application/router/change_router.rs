//! Change router implementation

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::application::build::{BuildCompletion, BuildInvoker, BuildMode, BuildOutcome};
use crate::application::link::{LinkManager, LinkOutcome, LinkRequest, LinkTable};
use crate::application::notifier::DevServerNotifier;
use crate::config::GlobalConfig;
use crate::domain::ports::{CommandRunner, CompilerErrorParser};
use crate::domain::services::check_mtime;
use crate::domain::value_objects::CrateName;
use crate::error::{RswError, RswResult};
use crate::infrastructure::package_json::{self, PACKAGE_JSON};

use super::watched::resolve_dir;
use super::{BuildQueue, DependencySnapshot, WatchedCrate};

/// Where a changed path belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The host project's package descriptor
    Descriptor,
    /// Indices of the crates whose build the path feeds
    Crates(Vec<usize>),
    /// Output, unwatched, or unrelated paths
    Ignored,
}

/// What handling a change did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Dependencies changed and the link pass ran
    Relinked,
    /// The descriptor changed without touching the dependency set
    DependenciesUnchanged,
    /// Async builds started now, and builds deferred behind running ones
    Built {
        started: Vec<CrateName>,
        deferred: Vec<CrateName>,
    },
    Ignored,
}

/// Dispatches filesystem changes to builds and link passes.
pub struct ChangeRouter {
    package_json: PathBuf,
    crates: Vec<WatchedCrate>,
    unlinks: Vec<String>,
    invoker: BuildInvoker,
    completions: Receiver<BuildCompletion>,
    links: LinkManager,
    notifier: DevServerNotifier,
    snapshot: DependencySnapshot,
    queue: BuildQueue,
    serialize_builds: bool,
    settle_delay: Duration,
    link_table: LinkTable,
    outstanding: usize,
}

impl ChangeRouter {
    /// Resolve every configured crate below the project directory.
    ///
    /// Fails on an unreadable crate manifest or an invalid unwatch glob.
    pub fn new(
        project_root: &Path,
        config: &GlobalConfig,
        runner: Arc<dyn CommandRunner>,
        parser: Arc<dyn CompilerErrorParser>,
        notifier: DevServerNotifier,
    ) -> RswResult<Self> {
        let crates_root = resolve_dir(&config.crates_root(project_root));
        let crates = config
            .crates
            .iter()
            .map(|spec| WatchedCrate::resolve(spec.clone(), &crates_root, &config.unwatch))
            .collect::<RswResult<Vec<_>>>()?;

        let (invoker, completions) = BuildInvoker::new(
            crates_root,
            config.build_defaults(),
            Arc::clone(&runner),
            parser,
        );
        let links = LinkManager::new(runner, config.cli, project_root.to_path_buf());

        Ok(Self {
            package_json: project_root.join(PACKAGE_JSON),
            crates,
            unlinks: config.unlinks.clone(),
            invoker,
            completions,
            links,
            notifier,
            snapshot: DependencySnapshot::new(),
            queue: BuildQueue::new(),
            serialize_builds: config.watch.serialize_builds,
            settle_delay: config.watch.settle_delay(),
            link_table: LinkTable::new(),
            outstanding: 0,
        })
    }

    pub fn crates(&self) -> &[WatchedCrate] {
        &self.crates
    }

    pub fn link_table(&self) -> &LinkTable {
        &self.link_table
    }

    pub fn package_json(&self) -> &Path {
        &self.package_json
    }

    /// Async builds whose completion has not been consumed yet.
    pub fn in_flight(&self) -> usize {
        self.outstanding
    }

    /// Paths the filesystem watcher must cover.
    pub fn watch_roots(&self) -> Vec<PathBuf> {
        let mut roots = vec![self.package_json.clone()];
        for watched in &self.crates {
            for path in watched.watch_paths() {
                if !roots.contains(&path) {
                    roots.push(path);
                }
            }
        }
        roots
    }

    /// Every crate's unwatch globs rendered against its root, deduplicated.
    pub fn unwatched(&self) -> Vec<String> {
        let mut all: Vec<String> = Vec::new();
        for pattern in self.crates.iter().flat_map(|c| c.unwatch.display_patterns()) {
            if !all.contains(&pattern) {
                all.push(pattern);
            }
        }
        all
    }

    pub fn classify(&self, path: &Path) -> Route {
        if path == self.package_json {
            return Route::Descriptor;
        }
        if self.crates.iter().any(|c| c.is_output(path)) {
            return Route::Ignored;
        }
        let owners: Vec<usize> = self
            .crates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.owns(path))
            .map(|(i, _)| i)
            .collect();
        if owners.is_empty() {
            Route::Ignored
        } else {
            Route::Crates(owners)
        }
    }

    /// Startup pass: unlink the `unlinks` list, build stale crates
    /// synchronously, then link every crate.
    ///
    /// A failed build aborts the pass with [`RswError::BuildFailed`].
    pub fn startup(&mut self) -> RswResult<&LinkTable> {
        if !self.unlinks.is_empty() {
            self.links.sync_links(LinkRequest::Unlink(&self.unlinks));
        }

        let mut table = LinkTable::new();
        for watched in &self.crates {
            let invoker = &self.invoker;
            check_mtime(
                &watched.stale_check(),
                |reason| {
                    tracing::debug!(crate_name = %watched.spec.name, ?reason, "crate is stale");
                    invoker.compile_one(&watched.spec, BuildMode::Sync, None)
                },
                || {
                    tracing::info!("[rsw::optimized] wasm-pack build {}.", watched.spec.name);
                    Ok(())
                },
            )?;
            table.insert(watched.spec.name.as_str(), watched.out_dir.clone());
        }

        self.links.sync_links(LinkRequest::Link(&table));
        self.link_table = table;

        if let Some(deps) = self.read_dependencies()? {
            self.snapshot.replace(deps);
        }
        Ok(&self.link_table)
    }

    /// Link pass over every crate without building or checking freshness.
    pub fn relink(&mut self) -> LinkOutcome {
        let mut table = LinkTable::new();
        for watched in &self.crates {
            table.insert(watched.spec.name.as_str(), watched.out_dir.clone());
        }
        let outcome = self.links.sync_links(LinkRequest::Link(&table));
        self.link_table = table;
        outcome
    }

    /// Route one changed path.
    ///
    /// Only a malformed package descriptor is an error; build failures
    /// arrive later as completions.
    pub fn handle_change(&mut self, path: &Path) -> RswResult<RouteOutcome> {
        match self.classify(path) {
            Route::Descriptor => self.descriptor_changed(),
            Route::Crates(indices) => Ok(self.build_crates(&indices, path)),
            Route::Ignored => {
                tracing::trace!(path = %path.display(), "ignored change");
                Ok(RouteOutcome::Ignored)
            }
        }
    }

    fn descriptor_changed(&mut self) -> RswResult<RouteOutcome> {
        let Some(deps) = self.read_dependencies()? else {
            tracing::debug!("{} was removed", self.package_json.display());
            return Ok(RouteOutcome::DependenciesUnchanged);
        };
        if !self.snapshot.differs(&deps) {
            return Ok(RouteOutcome::DependenciesUnchanged);
        }

        tracing::info!("[rsw::{}::relink]", self.links.flavor());
        thread::sleep(self.settle_delay);
        self.relink();
        self.snapshot.replace(deps);
        Ok(RouteOutcome::Relinked)
    }

    fn read_dependencies(&self) -> RswResult<Option<package_json::MergedDependencies>> {
        match package_json::read_merged_dependencies(&self.package_json) {
            Ok(deps) => Ok(Some(deps)),
            Err(RswError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn build_crates(&mut self, indices: &[usize], trigger: &Path) -> RouteOutcome {
        let mut started = Vec::new();
        let mut deferred = Vec::new();
        for &index in indices {
            let name = self.crates[index].spec.name.clone();
            if !self.serialize_builds {
                self.dispatch(index, trigger.to_path_buf());
                started.push(name);
                continue;
            }
            match self.queue.request(index, trigger.to_path_buf()) {
                Some(trigger) => {
                    self.dispatch(index, trigger);
                    started.push(name);
                }
                None => {
                    tracing::debug!(crate_name = %name, "build already running, deferred");
                    deferred.push(name);
                }
            }
        }
        RouteOutcome::Built { started, deferred }
    }

    fn dispatch(&mut self, index: usize, trigger: PathBuf) {
        self.outstanding += 1;
        self.invoker.compile_async(&self.crates[index].spec, trigger);
    }

    /// Consume every completion that has already arrived.
    pub fn drain_completions(&mut self) -> Vec<BuildCompletion> {
        let mut done = Vec::new();
        loop {
            match self.completions.try_recv() {
                Ok(completion) => {
                    self.complete(&completion);
                    done.push(completion);
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return done,
            }
        }
    }

    /// Wait up to `timeout` for the next completion and consume it.
    pub fn recv_completion(&mut self, timeout: Duration) -> Option<BuildCompletion> {
        match self.completions.recv_timeout(timeout) {
            Ok(completion) => {
                self.complete(&completion);
                Some(completion)
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    fn complete(&mut self, completion: &BuildCompletion) {
        self.outstanding = self.outstanding.saturating_sub(1);

        match &completion.outcome {
            BuildOutcome::Succeeded => {
                tracing::info!("[rsw::build] {} rebuilt", completion.crate_name);
                self.notifier.error_close();
            }
            BuildOutcome::Failed {
                diagnostic,
                console,
            } => {
                tracing::error!("{}", diagnostic.message);
                tracing::error!(
                    "[rsw::error] wasm-pack for crate {} failed.",
                    completion.crate_name
                );
                self.notifier.error(
                    &diagnostic.tag,
                    &completion.trigger.display().to_string(),
                    console,
                );
            }
        }

        if !self.serialize_builds {
            return;
        }
        let Some(index) = self
            .crates
            .iter()
            .position(|c| c.spec.name == completion.crate_name)
        else {
            return;
        };
        if let Some(next) = self.queue.finish(index) {
            self.dispatch(index, next);
        }
    }
}
