use anyhow::Result;

use rsw::application::{DevServerNotifier, LinkRequest};

use super::Context;

/// Link pass over every configured crate, without builds.
pub fn cmd_link(ctx: &Context) -> Result<()> {
    let mut router = ctx.router(DevServerNotifier::detached())?;
    let outcome = router.relink();
    if !outcome.is_clean() {
        tracing::warn!("{} link command(s) failed", outcome.failed.len());
    }
    Ok(())
}

/// Unlink every configured crate plus the `unlinks` list.
pub fn cmd_unlink(ctx: &Context) -> Result<()> {
    let names = unlink_names(ctx);
    ctx.link_manager().sync_links(LinkRequest::Unlink(&names));
    Ok(())
}

pub(crate) fn unlink_names(ctx: &Context) -> Vec<String> {
    let mut names: Vec<String> = ctx
        .config
        .crates
        .iter()
        .map(|spec| spec.name.to_string())
        .collect();
    for name in &ctx.config.unlinks {
        if !names.contains(name) {
            names.push(name.clone());
        }
    }
    names
}
