//! Watch Use Case
//!
//! Continuous file watching on top of the change router:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default, `[watch] debounce_ms`)
//! - Content-hash filtering of no-op saves
//! - Forwarding async build completions in arrival order
//!
//! ## Usage
//!
//! ```ignore
//! let mut router = ChangeRouter::new(...)?;
//! router.startup()?;
//! WatchUseCase::new(WatchOptions::default()).start(&mut router, running, |event| { ... })?;
//! ```

mod cache;
mod event;
mod use_case;


pub use cache::{compute_content_hash, ContentHashCache};
pub use event::{WatchEvent, WatchOptions, WatcherState, DEBOUNCE_MS, STARTUP_COOLDOWN_MS};
pub use use_case::WatchUseCase;
