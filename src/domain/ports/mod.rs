//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries to the external collaborators.
//! The infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod dev_server;
pub mod error_parser;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};
pub use dev_server::{DevServerEvent, DevServerEventKind, DevServerTransport, ErrorPayload};
pub use error_parser::{CompilerErrorParser, ParsedDiagnostic};
