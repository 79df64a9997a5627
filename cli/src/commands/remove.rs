//! `claude-agents remove [TYPE]` — delete installed items.

use anyhow::{Context, Result};
use clap::Args;

use crate::application::ports::LocalStore;
use crate::application::services::remove::{RemoveOptions, ensure_selection, remove_kind};
use crate::commands::{parse_type, report_usage};
use crate::domain::{AppConfig, parse_filter};
use crate::output::{OutputContext, TerminalReporter};

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// What to remove: agents, docs, reference, or all
    #[arg(value_name = "TYPE")]
    pub kind: Option<String>,

    /// Filter items to remove (comma-separated)
    #[arg(short, long, value_name = "ITEMS")]
    pub filter: Option<String>,

    /// Remove all items of the specified type
    #[arg(long)]
    pub all: bool,
}

/// Run `claude-agents remove`.
///
/// # Errors
///
/// Returns an error if an installed item cannot be deleted.
pub fn run(
    ctx: &OutputContext,
    config: &AppConfig,
    store: &impl LocalStore,
    args: &RemoveArgs,
) -> Result<()> {
    let Some(raw) = args.kind.as_deref() else {
        ctx.warn("Please specify what to remove: agents, docs, reference, or all");
        return Ok(());
    };
    let Some(selector) = parse_type(ctx, raw) else {
        return Ok(());
    };

    let opts = RemoveOptions {
        terms: parse_filter(args.filter.as_deref()),
        all: args.all,
    };
    if let Err(e) = ensure_selection(&opts) {
        report_usage(ctx, &e);
        return Ok(());
    }

    ctx.banner("Claude Agents Remover");
    let reporter = TerminalReporter::new(ctx);
    for kind in selector.kinds() {
        remove_kind(store, &reporter, config, kind, &opts)
            .with_context(|| format!("removing {}", kind.mass_noun()))?;
    }
    Ok(())
}
