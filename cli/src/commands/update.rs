//! `claude-agents update [TYPE]` — reinstall items over existing copies.

use anyhow::Result;
use clap::Args;

use crate::application::ports::{AssetSource, LocalStore};
use crate::application::services::install::InstallOptions;
use crate::commands::install::{execute, failure_policy};
use crate::commands::parse_type;
use crate::domain::AppConfig;
use crate::output::OutputContext;

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// What to update: agents, docs, reference, or all (default: all)
    #[arg(value_name = "TYPE")]
    pub kind: Option<String>,

    /// Force update even if already up to date
    #[arg(short, long)]
    pub force: bool,

    /// Continue past failed downloads and report them at the end
    #[arg(long)]
    pub keep_going: bool,
}

/// Run `claude-agents update`. Every item is re-downloaded; `--force` is
/// accepted for compatibility and changes nothing.
///
/// # Errors
///
/// Returns an error if the manifest cannot be fetched or an item cannot be
/// downloaded or written.
pub async fn run(
    ctx: &OutputContext,
    config: &AppConfig,
    source: &impl AssetSource,
    store: &impl LocalStore,
    args: &UpdateArgs,
) -> Result<()> {
    let Some(selector) = parse_type(ctx, args.kind.as_deref().unwrap_or("all")) else {
        return Ok(());
    };

    ctx.banner("Updating from GitHub...");
    let opts = InstallOptions {
        force: true,
        policy: failure_policy(args.keep_going),
        ..InstallOptions::default()
    };
    execute(ctx, config, source, store, selector, &opts).await
}
