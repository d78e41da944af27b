//! NDJSON dev-server transport
//!
//! Writes dev-server events as one JSON object per line so a host dev server
//! (or any process piping `rsw watch --json`) can forward them to its clients.

use crate::domain::ports::{DevServerEvent, DevServerTransport};
use std::io::{self, Write};
use std::sync::Mutex;

/// Transport that outputs NDJSON events to stdout
pub struct JsonEventTransport {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventTransport {
    /// Create a new JSON transport writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON transport writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl DevServerTransport for JsonEventTransport {
    fn send(&self, event: &DevServerEvent) -> io::Result<()> {
        let line = serde_json::to_string(event).map_err(io::Error::other)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("event writer poisoned"))?;
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}
