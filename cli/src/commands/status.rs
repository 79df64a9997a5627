//! `claude-agents status` — installed counts and disk usage.

use crate::application::ports::LocalStore;
use crate::application::services::status::collect_status;
use crate::domain::AppConfig;
use crate::output::{HumanRenderer, OutputContext};

/// Run the status command. Offline; never fails.
pub fn run(ctx: &OutputContext, config: &AppConfig, store: &impl LocalStore) {
    let report = collect_status(store, config);
    HumanRenderer::new(ctx).render_status(&report);
}
