use std::fs;

use anyhow::{Context as _, Result};

use rsw::application::LinkRequest;

use super::link::unlink_names;
use super::Context;

/// Remove every crate's published output directory, then unlink the crates.
pub fn cmd_clean(ctx: &Context, dry_run: bool) -> Result<()> {
    let crates_root = ctx.config.crates_root(&ctx.project_root);

    for spec in &ctx.config.crates {
        let out_dir = spec.published_dir(&crates_root);
        if !out_dir.exists() {
            continue;
        }
        if dry_run {
            tracing::info!("[rsw::clean] would remove {}", out_dir.display());
            continue;
        }
        fs::remove_dir_all(&out_dir)
            .with_context(|| format!("failed to remove {}", out_dir.display()))?;
        tracing::info!("[rsw::clean] removed {}", out_dir.display());
    }

    if !dry_run {
        let names = unlink_names(ctx);
        ctx.link_manager().sync_links(LinkRequest::Unlink(&names));
    }
    Ok(())
}
