//! Domain Entities

mod crate_spec;

pub use crate_spec::{CrateSpec, DEFAULT_OUT_DIR};
