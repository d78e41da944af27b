//! Change router
//!
//! Maps filesystem changes onto the engine: the host package descriptor
//! triggers a relink when its dependency set moves, a crate's sources or
//! manifest trigger an async build of that crate, and the startup pass
//! reconciles every crate before linking them all.

mod change_router;
mod queue;
mod snapshot;
mod watched;


pub use change_router::{ChangeRouter, Route, RouteOutcome};
pub use queue::BuildQueue;
pub use snapshot::DependencySnapshot;
pub use watched::WatchedCrate;
