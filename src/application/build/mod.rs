//! Build invoker
//!
//! Runs wasm-pack for one crate, either blocking (startup reconciliation,
//! where a failure ends the process) or on a worker thread whose completion
//! is delivered over a channel (live watch, where failures become
//! dev-server notifications).

mod invoker;


pub use invoker::{BuildCompletion, BuildInvoker, BuildMode, BuildOutcome};
