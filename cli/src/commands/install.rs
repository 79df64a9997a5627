//! `claude-agents install [TYPE]` — download items from the manifest.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::application::ports::{AssetSource, LocalStore};
use crate::application::services::install::{
    FailurePolicy, InstallOptions, InstallOutcome, install_kind,
};
use crate::commands::parse_type;
use crate::domain::{AppConfig, AssetError, TypeSelector, parse_filter};
use crate::output::{HumanRenderer, OutputContext, TerminalReporter};

/// Arguments for the install command.
#[derive(Args)]
pub struct InstallArgs {
    /// What to install: agents, docs, reference, or all
    #[arg(value_name = "TYPE")]
    pub kind: Option<String>,

    /// Filter items to install (comma-separated)
    #[arg(short, long, value_name = "ITEMS")]
    pub filter: Option<String>,

    /// Custom installation directory
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Force overwrite existing files
    #[arg(long)]
    pub force: bool,

    /// Show what would be installed without actually installing
    #[arg(long)]
    pub dry_run: bool,

    /// Continue past failed downloads and report them at the end
    #[arg(long)]
    pub keep_going: bool,
}

impl InstallArgs {
    fn options(&self) -> InstallOptions {
        InstallOptions {
            terms: parse_filter(self.filter.as_deref()),
            dir: self.dir.clone(),
            force: self.force,
            dry_run: self.dry_run,
            policy: failure_policy(self.keep_going),
        }
    }
}

pub(crate) fn failure_policy(keep_going: bool) -> FailurePolicy {
    if keep_going {
        FailurePolicy::Continue
    } else {
        FailurePolicy::AbortOnFirst
    }
}

/// Run `claude-agents install`.
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
    args: &InstallArgs,
) -> Result<()> {
    let Some(raw) = args.kind.as_deref() else {
        ctx.warn("Please specify what to install: agents, docs, reference, or all");
        return Ok(());
    };
    let Some(selector) = parse_type(ctx, raw) else {
        return Ok(());
    };

    ctx.banner("Claude Agents Installer");
    execute(ctx, config, source, store, selector, &args.options()).await
}

/// Install every kind of `selector` in order, shared by `install` and `update`.
///
/// The first fatal error stops the remaining kinds.
///
/// # Errors
///
/// Returns the first fatal install error, or `AssetError::DownloadsFailed`
/// when failures were collected under `FailurePolicy::Continue`.
pub async fn execute(
    ctx: &OutputContext,
    config: &AppConfig,
    source: &impl AssetSource,
    store: &impl LocalStore,
    selector: TypeSelector,
    opts: &InstallOptions,
) -> Result<()> {
    let reporter = TerminalReporter::new(ctx);
    let renderer = HumanRenderer::new(ctx);
    let mut failed = 0;

    for kind in selector.kinds() {
        let outcome = match install_kind(source, store, &reporter, config, kind, opts).await {
            Ok(outcome) => outcome,
            Err(e) => {
                ctx.error("Installation failed");
                return Err(e.context(format!("installing {}", kind.mass_noun())));
            }
        };
        match outcome {
            InstallOutcome::DryRun { names } => renderer.render_dry_run(&names),
            InstallOutcome::Completed(report) => failed += report.failed.len(),
        }
    }

    if failed > 0 {
        ctx.error("Installation finished with failures");
        return Err(AssetError::DownloadsFailed { count: failed }.into());
    }
    Ok(())
}
