//! Dev-server transport port
//!
//! Events pushed to clients of the host dev server. The wire shape is:
//!
//! ```json
//! { "type": "custom", "event": "rsw-error", "data": { "plugin": "...", "message": "...", "id": "...", "console": "..." } }
//! ```

use std::io;

use serde::Serialize;

/// Event envelope understood by the live-reload transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServerEvent {
    #[serde(rename = "type")]
    kind: EnvelopeKind,
    pub event: DevServerEventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ErrorPayload>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum EnvelopeKind {
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DevServerEventKind {
    #[serde(rename = "rsw-error")]
    Error,
    #[serde(rename = "rsw-error-close")]
    ErrorClose,
}

/// Details of a failed build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub plugin: String,
    /// Short diagnostic tag
    pub message: String,
    /// Path whose change triggered the build
    pub id: String,
    /// Raw stderr of the build tool
    pub console: String,
}

impl DevServerEvent {
    pub fn error(payload: ErrorPayload) -> Self {
        Self {
            kind: EnvelopeKind::Custom,
            event: DevServerEventKind::Error,
            data: Some(payload),
        }
    }

    pub fn error_close() -> Self {
        Self {
            kind: EnvelopeKind::Custom,
            event: DevServerEventKind::ErrorClose,
            data: None,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Live-reload transport of the host dev server.
pub trait DevServerTransport: Send + Sync {
    fn send(&self, event: &DevServerEvent) -> io::Result<()>;
}
