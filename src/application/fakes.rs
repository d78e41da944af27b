//! Recording fakes for the process and transport ports

use std::io;
use std::path::Path;
use std::sync::{Condvar, Mutex};

use crate::domain::ports::{
    CommandOutput, CommandRunner, CommandSpec, DevServerEvent, DevServerTransport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    Inherited,
    Captured,
}

#[derive(Debug, Clone)]
pub struct RecordedRun {
    pub kind: RunKind,
    pub command: CommandSpec,
}

/// Runner that records every command and answers from a script.
///
/// Commands succeed unless their working directory ends with a directory
/// registered through [`FakeRunner::fail_in`]. Captured runs block while the
/// runner is paused.
#[derive(Debug, Default)]
pub struct FakeRunner {
    runs: Mutex<Vec<RecordedRun>>,
    failures: Mutex<Vec<(String, CommandOutput)>>,
    paused: Mutex<bool>,
    resumed: Condvar,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_in(&self, dir: &str, code: i32, stderr: &str) {
        self.failures.lock().unwrap().push((
            dir.to_string(),
            CommandOutput {
                code: Some(code),
                stderr: stderr.to_string(),
            },
        ));
    }

    pub fn pause(&self) {
        *self.paused.lock().unwrap() = true;
    }

    pub fn resume(&self) {
        *self.paused.lock().unwrap() = false;
        self.resumed.notify_all();
    }

    pub fn runs(&self) -> Vec<RecordedRun> {
        self.runs.lock().unwrap().clone()
    }

    /// Rendered command lines of every run of `program`.
    pub fn lines_for(&self, program: &str) -> Vec<String> {
        self.runs()
            .into_iter()
            .filter(|r| r.command.program == program)
            .map(|r| r.command.command_line())
            .collect()
    }

    fn answer(&self, kind: RunKind, command: &CommandSpec) -> CommandOutput {
        self.runs.lock().unwrap().push(RecordedRun {
            kind,
            command: command.clone(),
        });
        let failures = self.failures.lock().unwrap();
        failures
            .iter()
            .find(|(dir, _)| command.cwd.ends_with(Path::new(dir)))
            .map(|(_, output)| output.clone())
            .unwrap_or(CommandOutput {
                code: Some(0),
                stderr: String::new(),
            })
    }
}

impl CommandRunner for FakeRunner {
    fn run_inherited(&self, command: &CommandSpec) -> io::Result<CommandOutput> {
        let mut output = self.answer(RunKind::Inherited, command);
        output.stderr.clear();
        Ok(output)
    }

    fn run_captured(&self, command: &CommandSpec) -> io::Result<CommandOutput> {
        let output = self.answer(RunKind::Captured, command);
        let mut paused = self.paused.lock().unwrap();
        while *paused {
            paused = self.resumed.wait(paused).unwrap();
        }
        Ok(output)
    }
}

/// Transport that keeps every event it is sent.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    events: Mutex<Vec<DevServerEvent>>,
}

impl RecordingTransport {
    pub fn events(&self) -> Vec<DevServerEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl DevServerTransport for RecordingTransport {
    fn send(&self, event: &DevServerEvent) -> io::Result<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}
