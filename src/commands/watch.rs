use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context as _, Result};

use rsw::application::{DevServerNotifier, WatchEvent, WatchOptions, WatchUseCase};
use rsw::infrastructure::JsonEventTransport;

use super::Context;

pub fn cmd_watch(ctx: &Context, json: bool) -> Result<()> {
    let notifier = if json {
        DevServerNotifier::attached(Arc::new(JsonEventTransport::stdout()))
    } else {
        DevServerNotifier::detached()
    };

    let mut router = ctx.router(notifier)?;
    router.startup()?;

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set the Ctrl+C handler")?;

    let options = WatchOptions::from_config(&ctx.config.watch);
    WatchUseCase::new(options).start(&mut router, running, log_event)?;
    Ok(())
}

fn log_event(event: WatchEvent) {
    match event {
        WatchEvent::WatchStarted {
            watching,
            unwatched,
        } => {
            for path in &watching {
                tracing::debug!("[rsw::watch] {}", path.display());
            }
            if !unwatched.is_empty() {
                tracing::info!("[rsw::unwatch]");
                for pattern in &unwatched {
                    tracing::info!("  {pattern}");
                }
            }
            tracing::info!("[rsw::watch] watching {} path(s), Ctrl+C to stop", watching.len());
        }
        WatchEvent::FileChanged { path } => {
            tracing::info!("[rsw::watch] changed {}", path.display());
        }
        WatchEvent::Relinked => tracing::info!("[rsw::watch] links refreshed"),
        WatchEvent::BuildsStarted { started, deferred } => {
            for name in &started {
                tracing::info!("[rsw::build] {name}");
            }
            for name in &deferred {
                tracing::debug!("[rsw::build] {name} queued behind a running build");
            }
        }
        WatchEvent::BuildFinished { crate_name, ok } => {
            tracing::debug!(%crate_name, ok, "build finished");
        }
        WatchEvent::Shutdown => tracing::info!("[rsw::watch] stopped"),
    }
}
