//! `claude-agents list [TYPE]` — installed and available items.

use clap::Args;

use crate::application::ports::{AssetSource, LocalStore};
use crate::application::services::listing::{build_listing, fetch_available};
use crate::commands::parse_type;
use crate::domain::{AppConfig, TypeSelector};
use crate::output::{HumanRenderer, OutputContext, progress};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// What to list: agents, docs, reference, or all (default: all)
    #[arg(value_name = "TYPE")]
    pub kind: Option<String>,

    /// Show only installed items
    #[arg(short, long)]
    pub installed: bool,

    /// Show only available items
    #[arg(short, long)]
    pub available: bool,
}

/// Run the list command.
///
/// The manifest is fetched once; when it is unreachable only installed items
/// are shown.
pub async fn run(
    ctx: &OutputContext,
    config: &AppConfig,
    source: &impl AssetSource,
    store: &impl LocalStore,
    args: &ListArgs,
) {
    let selector = match args.kind.as_deref() {
        None => TypeSelector::All,
        Some(raw) => match parse_type(ctx, raw) {
            Some(selector) => selector,
            None => return,
        },
    };

    let manifest = if args.installed {
        None
    } else if ctx.show_progress() {
        let pb = progress::spinner("Fetching manifest...");
        let manifest = fetch_available(source).await;
        progress::finish_clear(&pb);
        manifest
    } else {
        fetch_available(source).await
    };
    if manifest.is_none() && !args.installed {
        ctx.info("Could not fetch manifest; showing installed items only");
    }

    let renderer = HumanRenderer::new(ctx);
    for kind in selector.kinds() {
        let listing = build_listing(store, config, kind, manifest.as_ref());
        renderer.render_listing(&listing, !args.available, !args.installed);
    }
    if !ctx.quiet {
        println!();
    }
}
