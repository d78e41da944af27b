//! Fakes for the process and dev-server ports.

use std::io;
use std::path::Path;
use std::sync::Mutex;

use rsw::domain::ports::{
    CommandOutput, CommandRunner, CommandSpec, DevServerEvent, DevServerTransport,
};

/// A command the runner was asked to run, and whether stdio was inherited.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub inherited: bool,
    pub command: CommandSpec,
}

impl Recorded {
    /// `program subcommand`, e.g. `wasm-pack build` or `npm link`
    pub fn head(&self) -> String {
        match self.command.args.first() {
            Some(sub) => format!("{} {sub}", self.command.program),
            None => self.command.program.clone(),
        }
    }
}

/// Runner that records commands and fails those run inside scripted
/// directories.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    runs: Mutex<Vec<Recorded>>,
    failures: Mutex<Vec<(String, i32, String)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands whose working directory ends with `dir` exit with `code`.
    pub fn fail_in(&self, dir: &str, code: i32, stderr: &str) {
        self.failures
            .lock()
            .unwrap()
            .push((dir.to_string(), code, stderr.to_string()));
    }

    pub fn runs(&self) -> Vec<Recorded> {
        self.runs.lock().unwrap().clone()
    }

    pub fn heads(&self) -> Vec<String> {
        self.runs().iter().map(Recorded::head).collect()
    }

    fn answer(&self, inherited: bool, command: &CommandSpec) -> CommandOutput {
        self.runs.lock().unwrap().push(Recorded {
            inherited,
            command: command.clone(),
        });
        self.failures
            .lock()
            .unwrap()
            .iter()
            .find(|(dir, _, _)| command.cwd.ends_with(Path::new(dir)))
            .map(|(_, code, stderr)| CommandOutput {
                code: Some(*code),
                stderr: if inherited { String::new() } else { stderr.clone() },
            })
            .unwrap_or(CommandOutput {
                code: Some(0),
                stderr: String::new(),
            })
    }
}

impl CommandRunner for ScriptedRunner {
    fn run_inherited(&self, command: &CommandSpec) -> io::Result<CommandOutput> {
        Ok(self.answer(true, command))
    }

    fn run_captured(&self, command: &CommandSpec) -> io::Result<CommandOutput> {
        Ok(self.answer(false, command))
    }
}

/// Transport that keeps every event, plus its JSON rendering.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    events: Mutex<Vec<DevServerEvent>>,
}

impl RecordingTransport {
    pub fn events(&self) -> Vec<DevServerEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn json(&self) -> Vec<serde_json::Value> {
        self.events()
            .iter()
            .map(|e| serde_json::from_str(&e.to_json()).unwrap())
            .collect()
    }
}

impl DevServerTransport for RecordingTransport {
    fn send(&self, event: &DevServerEvent) -> io::Result<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}
