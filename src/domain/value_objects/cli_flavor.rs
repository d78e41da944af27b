//! Package manager flavor used for `link` / `unlink`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CliFlavor {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

impl CliFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            CliFlavor::Npm => "npm",
            CliFlavor::Yarn => "yarn",
            CliFlavor::Pnpm => "pnpm",
        }
    }

    /// Program to execute. Package managers ship as `.cmd` shims on Windows.
    pub fn program(&self) -> String {
        if cfg!(windows) {
            format!("{}.cmd", self.as_str())
        } else {
            self.as_str().to_string()
        }
    }
}

impl fmt::Display for CliFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CliFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(CliFlavor::Npm),
            "yarn" => Ok(CliFlavor::Yarn),
            "pnpm" => Ok(CliFlavor::Pnpm),
            other => Err(format!(
                "unknown package manager '{other}' (expected npm, yarn or pnpm)"
            )),
        }
    }
}
