//! Crate name value object
//!
//! A crate is identified by the name it is configured with. Names of the form
//! `@scope/name` belong to an npm scope; their wasm-pack output name encodes
//! the scope and local name as `scope~name` so the package can be reconstructed
//! from the artifact name later.

use std::fmt;
use std::path::{Path, PathBuf};

/// Separator between scope and local name in published artifact names.
pub const SCOPE_SEPARATOR: char = '~';

/// Resolved crate identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CrateName {
    raw: String,
    scope: Option<String>,
}

impl CrateName {
    /// Parse a configured crate name.
    ///
    /// `@org/foo` yields scope `org`; anything that is not a well-formed
    /// `@scope/name` pair is kept as an unscoped name.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let scope = raw
            .strip_prefix('@')
            .and_then(|rest| rest.split_once('/'))
            .filter(|(scope, local)| !scope.is_empty() && !local.is_empty() && !local.contains('/'))
            .map(|(scope, _)| scope.to_string());
        Self { raw, scope }
    }

    /// Rebuild a crate name from a wasm-pack `--out-name` value.
    pub fn from_out_name(out_name: &str) -> Self {
        match out_name.split_once(SCOPE_SEPARATOR) {
            Some((scope, local)) if !scope.is_empty() && !local.is_empty() => {
                Self::new(format!("@{scope}/{local}"))
            }
            _ => Self::new(out_name),
        }
    }

    /// The name exactly as configured; also the npm package name.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn is_scoped(&self) -> bool {
        self.scope.is_some()
    }

    /// Name without the `@scope/` prefix.
    pub fn local_name(&self) -> &str {
        match &self.scope {
            // "@" + scope + "/"
            Some(scope) => &self.raw[scope.len() + 2..],
            None => &self.raw,
        }
    }

    /// Value passed to wasm-pack's `--out-name`.
    pub fn out_name(&self) -> String {
        match &self.scope {
            Some(scope) => format!("{scope}{SCOPE_SEPARATOR}{}", self.local_name()),
            None => self.raw.clone(),
        }
    }

    /// Directory of the crate below the configured crates root.
    pub fn dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.raw)
    }
}

impl fmt::Display for CrateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for CrateName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CrateName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for CrateName {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
