use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rsw::domain::value_objects::{CliFlavor, Profile};

/// rsw - build wasm-pack crates and keep them linked into a JS project
#[derive(Parser, Debug)]
#[command(name = "rsw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: <project>/rsw.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Host project directory (default: discovered from the current directory)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub overrides: BuildOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that win over every configuration layer
#[derive(Args, Debug, Default, Clone)]
pub struct BuildOverrides {
    /// Default build profile (dev, release, profiling)
    #[arg(long, global = true)]
    pub profile: Option<Profile>,

    /// Default wasm-pack target (web, bundler, nodejs, ...)
    #[arg(long, global = true)]
    pub target: Option<String>,

    /// Package manager used for link/unlink (npm, yarn, pnpm)
    #[arg(long, global = true)]
    pub cli: Option<CliFlavor>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build stale crates, link them, then rebuild on every change
    Watch {
        /// Write dev-server events to stdout as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Build stale crates and link them, then exit
    Build,

    /// Link every crate's output directory without building
    Link,

    /// Unlink every crate and the configured `unlinks` list
    Unlink,

    /// Remove published output directories and unlink the crates
    Clean {
        /// Show what would be removed
        #[arg(long)]
        dry_run: bool,
    },

    /// Write a commented rsw.toml template
    Init {
        /// Overwrite an existing rsw.toml
        #[arg(short, long)]
        force: bool,
    },
}
