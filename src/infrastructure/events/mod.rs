//! Dev-server transport implementations
//!
//! - JsonEventTransport: NDJSON event stream on stdout

mod json;

pub use json::JsonEventTransport;
