//! Link manager implementation

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::ports::{CommandRunner, CommandSpec};
use crate::domain::value_objects::CliFlavor;

use super::LinkTable;

/// One link-registry update.
#[derive(Debug, Clone, Copy)]
pub enum LinkRequest<'a> {
    /// Globally unlink every name in the table, then link all directories.
    Link(&'a LinkTable),
    /// Unlink the given package names.
    Unlink(&'a [String]),
}

/// Commands of a pass that did not exit cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOutcome {
    pub commands: usize,
    pub failed: Vec<String>,
}

impl LinkOutcome {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Sole writer of the package manager's link registry.
#[derive(Debug, Clone)]
pub struct LinkManager {
    runner: Arc<dyn CommandRunner>,
    flavor: CliFlavor,
    cwd: PathBuf,
}

impl LinkManager {
    /// Package manager commands run from `cwd` (the host project directory).
    pub fn new(runner: Arc<dyn CommandRunner>, flavor: CliFlavor, cwd: PathBuf) -> Self {
        Self {
            runner,
            flavor,
            cwd,
        }
    }

    pub fn flavor(&self) -> CliFlavor {
        self.flavor
    }

    /// The commands a request expands to, in execution order.
    pub fn commands(&self, request: LinkRequest<'_>) -> Vec<CommandSpec> {
        let program = self.flavor.program();
        match request {
            LinkRequest::Link(table) if table.is_empty() => Vec::new(),
            LinkRequest::Link(table) => vec![
                CommandSpec::new(program.clone(), self.cwd.clone())
                    .args(["unlink", "-g"])
                    .args(table.names()),
                CommandSpec::new(program.clone(), self.cwd.clone())
                    .arg("link")
                    .args(table.dirs().map(|dir| dir.display().to_string())),
            ],
            LinkRequest::Unlink([]) => Vec::new(),
            LinkRequest::Unlink(names) => vec![CommandSpec::new(program.clone(), self.cwd.clone())
                .arg("unlink")
                .args(names.iter().cloned())],
        }
    }

    /// Bring the link registry in line with `request`.
    ///
    /// Non-zero exits are logged and reported in the outcome; the next full
    /// pass repairs any drift.
    pub fn sync_links(&self, request: LinkRequest<'_>) -> LinkOutcome {
        let mut outcome = LinkOutcome::default();
        for command in self.commands(request) {
            outcome.commands += 1;
            let line = command.command_line();
            tracing::debug!("[{}]: {line}", self.flavor);
            match self.runner.run_inherited(&command) {
                Ok(output) if output.success() => {}
                Ok(output) => {
                    tracing::warn!(code = ?output.code, "`{line}` exited unsuccessfully");
                    outcome.failed.push(line);
                }
                Err(e) => {
                    tracing::warn!("failed to spawn `{line}`: {e}");
                    outcome.failed.push(line);
                }
            }
        }

        self.log_request(request);
        outcome
    }

    fn log_request(&self, request: LinkRequest<'_>) {
        match request {
            LinkRequest::Link(table) => {
                tracing::info!("[rsw::{}::link]", self.flavor);
                for (name, dir) in table.iter() {
                    tracing::info!("  {name} -> {}", dir.display());
                }
            }
            LinkRequest::Unlink(names) => {
                tracing::info!("[rsw::{}::unlink]", self.flavor);
                for name in names {
                    tracing::info!("  {name}");
                }
            }
        }
    }
}
