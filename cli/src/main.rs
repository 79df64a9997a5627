//! claude-agents - Install and manage Claude agents, documentation, and reference code

use clap::Parser;

use claude_agents_cli::cli::Cli;
use claude_agents_cli::infra::logging;

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
