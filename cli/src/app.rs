//! Application context — unified state passed to every command handler.
//!
//! Built once in `Cli::run()`. Commands receive the pieces they need from it
//! explicitly so tests can substitute their own source and store.

use anyhow::{Context, Result};

use crate::domain::AppConfig;
use crate::infra::{GithubAssetSource, LocalFs};
use crate::output::OutputContext;

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Target roots and remote repository.
    pub config: AppConfig,
    /// HTTP client for the manifest and assets.
    pub source: GithubAssetSource,
    /// Local filesystem store.
    pub store: LocalFs,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or the
    /// HTTP client cannot be built.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        let config = AppConfig::from_home(&home);
        tracing::debug!(home = %home.display(), "resolved installation roots");

        let source = GithubAssetSource::new(config.github.clone())
            .context("failed to initialise HTTP client")?;

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            config,
            source,
            store: LocalFs,
        })
    }
}
