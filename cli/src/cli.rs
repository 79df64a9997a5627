//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Install and manage Claude agents, documentation, and reference code
#[derive(Parser)]
#[command(
    name = "claude-agents",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install agents, docs, reference code, or all
    Install(commands::install::InstallArgs),

    /// List available agents, docs, or reference code
    List(commands::list::ListArgs),

    /// Update installed agents, docs, or reference code from GitHub
    Update(commands::update::UpdateArgs),

    /// Remove installed agents, docs, or reference code
    Remove(commands::remove::RemoveArgs),

    /// Show installation status and statistics
    Status,

    /// Show installation paths and configuration
    Info,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the application context cannot be built or the
    /// command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            quiet,
            no_color,
            command,
        } = self;
        let app = AppContext::new(&AppFlags { no_color, quiet })?;
        let ctx = &app.output;

        match command {
            Command::Install(args) => {
                commands::install::run(ctx, &app.config, &app.source, &app.store, &args).await
            }
            Command::List(args) => {
                commands::list::run(ctx, &app.config, &app.source, &app.store, &args).await;
                Ok(())
            }
            Command::Update(args) => {
                commands::update::run(ctx, &app.config, &app.source, &app.store, &args).await
            }
            Command::Remove(args) => commands::remove::run(ctx, &app.config, &app.store, &args),
            Command::Status => {
                commands::status::run(ctx, &app.config, &app.store);
                Ok(())
            }
            Command::Info => {
                commands::info::run(ctx, &app.config);
                Ok(())
            }
        }
    }
}
