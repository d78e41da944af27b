//! Dev-server notifier
//!
//! Forwards build results to the live-reload transport when one is attached.
//! Without a transport (e.g. `rsw build`) every call is a no-op. Transport
//! failures are logged, never returned.

use std::fmt;
use std::sync::Arc;

use crate::domain::ports::{DevServerEvent, DevServerTransport, ErrorPayload};

/// Plugin identifier carried in error payloads.
pub const PLUGIN_ID: &str = "[rsw]";

#[derive(Clone, Default)]
pub struct DevServerNotifier {
    transport: Option<Arc<dyn DevServerTransport>>,
}

impl DevServerNotifier {
    /// Notifier with no transport.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn attached(transport: Arc<dyn DevServerTransport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.transport.is_some()
    }

    /// Clear any error overlay for a successfully rebuilt crate.
    pub fn error_close(&self) {
        self.notify(&DevServerEvent::error_close());
    }

    /// Report a failed build triggered by `id`.
    pub fn error(&self, message: &str, id: &str, console: &str) {
        self.notify(&DevServerEvent::error(ErrorPayload {
            plugin: PLUGIN_ID.to_string(),
            message: message.to_string(),
            id: id.to_string(),
            console: console.to_string(),
        }));
    }

    pub fn notify(&self, event: &DevServerEvent) {
        let Some(transport) = &self.transport else {
            return;
        };
        if let Err(e) = transport.send(event) {
            tracing::warn!("failed to forward dev-server event: {e}");
        }
    }
}

impl fmt::Debug for DevServerNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DevServerNotifier")
            .field("attached", &self.is_attached())
            .finish()
    }
}
