//! CommandRunner port - abstraction over child processes
//!
//! The build tool and the package manager are both driven through this trait
//! so the orchestration logic can be exercised without spawning anything.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::domain::services::command_line;

/// A fully resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Shell-like rendering for logs.
    pub fn command_line(&self) -> String {
        command_line::render(&self.program, &self.args)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// How a child process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Captured stderr (empty when stdio was inherited)
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner: Send + Sync + fmt::Debug {
    /// Run to completion with stdin and stderr inherited from this process.
    /// The child's stdout goes to this process's stderr; stdout carries only
    /// dev-server events.
    fn run_inherited(&self, command: &CommandSpec) -> io::Result<CommandOutput>;

    /// Run to completion capturing stderr.
    fn run_captured(&self, command: &CommandSpec) -> io::Result<CommandOutput>;
}
