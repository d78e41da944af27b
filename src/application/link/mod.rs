//! Link manager
//!
//! Keeps the package manager's global link registry consistent with the
//! crate set. A link pass unlinks the whole batch before linking it again so
//! no crate's stale link outlives its neighbours' new ones.

mod manager;
mod table;


pub use manager::{LinkManager, LinkOutcome, LinkRequest};
pub use table::LinkTable;
