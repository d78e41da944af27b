use anyhow::Result;

use rsw::application::DevServerNotifier;

use super::Context;

/// Startup pass without a dev server: build stale crates, then link.
///
/// A failed build ends the command with an error.
pub fn cmd_build(ctx: &Context) -> Result<()> {
    let mut router = ctx.router(DevServerNotifier::detached())?;
    let table = router.startup()?;
    tracing::info!("[rsw::build] {} crate(s) ready", table.len());
    Ok(())
}
