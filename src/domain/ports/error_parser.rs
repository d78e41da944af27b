//! Compiler-error parser port

/// Condensed view of a failed build's stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDiagnostic {
    /// One-line summary shown in the dev-server overlay
    pub tag: String,
    /// Formatted multi-line message for the console
    pub message: String,
}

pub trait CompilerErrorParser: Send + Sync {
    fn parse(&self, stderr: &str) -> ParsedDiagnostic;
}
