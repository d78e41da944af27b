//! rsw CLI - wasm-pack build orchestrator
//!
//! Usage: rsw <COMMAND>
//!
//! Commands:
//!   watch   Build stale crates, link them, then rebuild on change
//!   build   Build stale crates and link them
//!   link    Relink every crate
//!   unlink  Unlink every crate
//!   clean   Remove build outputs and unlink
//!   init    Write a template rsw.toml

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use cli::{Cli, Commands};
use rsw::config::LoggingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            init_tracing(&LoggingConfig::default(), cli.verbose);
            let project_root = commands::resolve_project_root(cli.project.as_deref())?;
            commands::init::cmd_init(&project_root, force)
        }
        Commands::Watch { json } => commands::watch::cmd_watch(&setup(&cli)?, json),
        Commands::Build => commands::build::cmd_build(&setup(&cli)?),
        Commands::Link => commands::link::cmd_link(&setup(&cli)?),
        Commands::Unlink => commands::link::cmd_unlink(&setup(&cli)?),
        Commands::Clean { dry_run } => commands::clean::cmd_clean(&setup(&cli)?, dry_run),
    }
}

/// Load configuration, then start logging at its level.
fn setup(cli: &Cli) -> Result<commands::Context> {
    let ctx = commands::Context::load(cli)?;
    init_tracing(&ctx.config.log, cli.verbose);
    ctx.report_warnings();
    Ok(ctx)
}

/// Logs go to stderr; stdout carries `watch --json` events.
fn init_tracing(config: &LoggingConfig, verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
