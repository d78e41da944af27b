//! Command implementations for the `rsw` binary

pub mod build;
pub mod clean;
pub mod init;
pub mod link;
mod project_root;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};

use rsw::application::{ChangeRouter, DevServerNotifier, LinkManager};
use rsw::config::{ConfigWarning, GlobalConfig};
use rsw::infrastructure::{ProcessRunner, RustcErrorParser};

use crate::cli::{BuildOverrides, Cli};

/// Project directory and fully layered configuration of one invocation.
pub struct Context {
    pub project_root: PathBuf,
    pub config: GlobalConfig,
    warnings: Vec<ConfigWarning>,
}

impl Context {
    pub fn load(cli: &Cli) -> Result<Self> {
        let project_root = resolve_project_root(cli.project.as_deref())?;

        let (config, warnings) = match &cli.config {
            Some(path) => GlobalConfig::load_with_warnings(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => GlobalConfig::load_or_default(&project_root)?,
        };
        // Environment overrides apply once, whichever file was loaded.
        let config = apply_overrides(config.with_env_overrides(), &cli.overrides);

        Ok(Self {
            project_root,
            config,
            warnings,
        })
    }

    pub fn report_warnings(&self) {
        for warning in &self.warnings {
            tracing::warn!("{warning}");
        }
    }

    pub fn router(&self, notifier: DevServerNotifier) -> Result<ChangeRouter> {
        let router = ChangeRouter::new(
            &self.project_root,
            &self.config,
            Arc::new(ProcessRunner::new()),
            Arc::new(RustcErrorParser::new()),
            notifier,
        )?;
        Ok(router)
    }

    pub fn link_manager(&self) -> LinkManager {
        LinkManager::new(
            Arc::new(ProcessRunner::new()),
            self.config.cli,
            self.project_root.clone(),
        )
    }
}

/// `--project` or the discovered project directory, canonicalized so paths
/// match what the filesystem watcher reports.
pub fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let root = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().context("cannot read the current directory")?;
            project_root::discover_project_root(&cwd)
        }
    };
    root.canonicalize()
        .with_context(|| format!("project directory {} does not exist", root.display()))
}

fn apply_overrides(mut config: GlobalConfig, overrides: &BuildOverrides) -> GlobalConfig {
    if let Some(profile) = overrides.profile {
        config.profile = Some(profile);
    }
    if let Some(target) = &overrides.target {
        config.target = Some(target.clone());
    }
    if let Some(cli) = overrides.cli {
        config.cli = cli;
    }
    config
}
