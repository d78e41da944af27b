//! Init command - write a template rsw.toml

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use rsw::config::{template, CONFIG_FILE};

pub fn cmd_init(project_root: &Path, force: bool) -> Result<()> {
    let path = project_root.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    fs::write(&path, template()).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("created {}", path.display());
    Ok(())
}
