//! `claude-agents info` — show installation paths and source repository.

use crate::domain::AppConfig;
use crate::output::{HumanRenderer, OutputContext};

/// Run the info command.
pub fn run(ctx: &OutputContext, config: &AppConfig) {
    HumanRenderer::new(ctx).render_info(config);
}
