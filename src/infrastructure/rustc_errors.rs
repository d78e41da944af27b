//! Condenses wasm-pack / rustc stderr into a dev-server diagnostic
//!
//! The tag is the first compiler error headline (`error[E0425]: ...`). The
//! message is the block of compiler diagnostics, without wasm-pack's progress
//! lines and its trailing `Error:` / `Caused by:` summary.

use crate::domain::ports::{CompilerErrorParser, ParsedDiagnostic};

const FALLBACK_TAG: &str = "wasm-pack build failed";

#[derive(Debug, Clone, Copy, Default)]
pub struct RustcErrorParser;

impl RustcErrorParser {
    pub fn new() -> Self {
        Self
    }
}

impl CompilerErrorParser for RustcErrorParser {
    fn parse(&self, stderr: &str) -> ParsedDiagnostic {
        let clean = strip_ansi(stderr);
        let lines: Vec<&str> = clean
            .lines()
            .filter(|line| !line.trim_start().starts_with("[INFO]"))
            .collect();

        let first_error = lines.iter().position(|l| is_error_headline(l));

        let Some(start) = first_error else {
            let tag = lines
                .iter()
                .find(|l| l.starts_with("Error:"))
                .or_else(|| lines.iter().rev().find(|l| !l.trim().is_empty()))
                .map(|l| l.trim().to_string())
                .unwrap_or_else(|| FALLBACK_TAG.to_string());
            return ParsedDiagnostic {
                tag,
                message: lines.join("\n").trim().to_string(),
            };
        };

        let end = lines[start..]
            .iter()
            .position(|l| l.starts_with("Error:") || l.starts_with("Caused by:"))
            .map_or(lines.len(), |offset| start + offset);

        ParsedDiagnostic {
            tag: lines[start].trim().to_string(),
            message: lines[start..end].join("\n").trim_end().to_string(),
        }
    }
}

fn is_error_headline(line: &str) -> bool {
    line.starts_with("error[") || line.starts_with("error:")
}

/// Remove CSI escape sequences (colors, cursor movement).
fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates until a final byte in '@'..='~'.
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
