//! Child-process runner backed by `std::process::Command`

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec};

#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args).current_dir(&spec.cwd);
        cmd
    }
}

impl CommandRunner for ProcessRunner {
    fn run_inherited(&self, spec: &CommandSpec) -> io::Result<CommandOutput> {
        let status = Self::command(spec)
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit())
            .status()?;

        Ok(CommandOutput {
            code: status.code(),
            stderr: String::new(),
        })
    }

    fn run_captured(&self, spec: &CommandSpec) -> io::Result<CommandOutput> {
        let output = Self::command(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()?;

        Ok(CommandOutput {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
