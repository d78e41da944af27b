//! Build invoker implementation

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::domain::entities::CrateSpec;
use crate::domain::ports::{CommandRunner, CommandSpec, CompilerErrorParser, ParsedDiagnostic};
use crate::domain::services::{BuildDefaults, BuildInvocation, BUILD_TOOL};
use crate::domain::value_objects::CrateName;
use crate::error::{RswError, RswResult};

/// How a build is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Block until the build exits, stdio inherited. Failure is fatal.
    Sync,
    /// Run on a worker thread capturing stderr; the result arrives as a
    /// [`BuildCompletion`].
    Async,
}

/// Result of an async build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Succeeded,
    Failed {
        diagnostic: ParsedDiagnostic,
        /// Raw stderr of the build tool
        console: String,
    },
}

/// Completion event of one async build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCompletion {
    pub crate_name: CrateName,
    /// Path whose change triggered the build
    pub trigger: PathBuf,
    pub outcome: BuildOutcome,
}

/// Builds one crate at a time with wasm-pack.
///
/// Async builds of the same crate are not serialized here; see the change
/// router for the per-crate in-flight guard.
pub struct BuildInvoker {
    crates_root: PathBuf,
    defaults: BuildDefaults,
    runner: Arc<dyn CommandRunner>,
    parser: Arc<dyn CompilerErrorParser>,
    completions: Sender<BuildCompletion>,
}

impl BuildInvoker {
    /// Create an invoker and the channel its async completions arrive on.
    pub fn new(
        crates_root: PathBuf,
        defaults: BuildDefaults,
        runner: Arc<dyn CommandRunner>,
        parser: Arc<dyn CompilerErrorParser>,
    ) -> (Self, Receiver<BuildCompletion>) {
        let (completions, rx) = channel();
        let invoker = Self {
            crates_root,
            defaults,
            runner,
            parser,
            completions,
        };
        (invoker, rx)
    }

    pub fn crates_root(&self) -> &Path {
        &self.crates_root
    }

    pub fn invocation(&self, spec: &CrateSpec) -> BuildInvocation {
        BuildInvocation::derive(&self.defaults, spec)
    }

    /// The wasm-pack command for `spec`, run from the crate directory.
    pub fn command(&self, spec: &CrateSpec) -> CommandSpec {
        let invocation = self.invocation(spec);
        tracing::debug!(crate_name = %spec.name, "[wasm-pack build]: {}", invocation.command_line());
        CommandSpec::new(BUILD_TOOL, spec.crate_root(&self.crates_root))
            .args(invocation.args().iter().cloned())
    }

    /// Build `spec` in the given mode.
    ///
    /// `trigger` attributes async failures to the changed file; it defaults to
    /// the crate's manifest.
    pub fn compile_one(
        &self,
        spec: &CrateSpec,
        mode: BuildMode,
        trigger: Option<&Path>,
    ) -> RswResult<()> {
        match mode {
            BuildMode::Sync => self.compile_sync(spec),
            BuildMode::Async => {
                let trigger = trigger
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| spec.crate_root(&self.crates_root).join("Cargo.toml"));
                self.compile_async(spec, trigger);
                Ok(())
            }
        }
    }

    /// Blocking build with inherited stdio.
    pub fn compile_sync(&self, spec: &CrateSpec) -> RswResult<()> {
        let command = self.command(spec);
        let output = self
            .runner
            .run_inherited(&command)
            .map_err(|source| RswError::Spawn {
                command: command.command_line(),
                source,
            })?;

        if !output.success() {
            tracing::error!("[rsw::error] wasm-pack for crate {} failed.", spec.name);
            return Err(RswError::BuildFailed {
                crate_name: spec.name.to_string(),
                code: output.code,
            });
        }
        Ok(())
    }

    /// Start a build on a worker thread and return immediately.
    pub fn compile_async(&self, spec: &CrateSpec, trigger: PathBuf) {
        let command = self.command(spec);
        let runner = Arc::clone(&self.runner);
        let parser = Arc::clone(&self.parser);
        let tx = self.completions.clone();
        let crate_name = spec.name.clone();

        let job = {
            let crate_name = crate_name.clone();
            let trigger = trigger.clone();
            move || {
                let outcome = match runner.run_captured(&command) {
                    Ok(output) if output.success() => BuildOutcome::Succeeded,
                    Ok(output) => BuildOutcome::Failed {
                        diagnostic: parser.parse(&output.stderr),
                        console: output.stderr,
                    },
                    Err(e) => start_failure(format!(
                        "failed to spawn `{}`: {e}",
                        command.command_line()
                    )),
                };
                // The receiver only goes away when the router shuts down.
                let _ = tx.send(BuildCompletion {
                    crate_name,
                    trigger,
                    outcome,
                });
            }
        };

        let spawned = thread::Builder::new()
            .name(format!("rsw-build-{}", crate_name.out_name()))
            .spawn(job);
        if let Err(e) = spawned {
            let _ = self.completions.send(BuildCompletion {
                crate_name,
                trigger,
                outcome: start_failure(format!("failed to start build thread: {e}")),
            });
        }
    }
}

/// Failure before the build tool produced any output.
fn start_failure(console: String) -> BuildOutcome {
    BuildOutcome::Failed {
        diagnostic: ParsedDiagnostic {
            tag: console.clone(),
            message: console.clone(),
        },
        console,
    }
}
