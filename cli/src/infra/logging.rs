//! Diagnostic logging to stderr, controlled by `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Defaults to `warn` so regular command output stays uncluttered; set
/// `RUST_LOG=claude_agents_cli=debug` to trace requests and file writes.
/// Calling this more than once is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
