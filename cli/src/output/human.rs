//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::application::services::listing::KindListing;
use crate::application::services::status::StatusReport;
use crate::domain::{AppConfig, ItemKind};
use crate::output::{OutputContext, RULE_WIDTH};

/// Renders service results as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the candidates of a dry-run install.
    pub fn render_dry_run(&self, names: &[String]) {
        if self.ctx.quiet {
            return;
        }
        println!();
        println!("  {}", "Dry run - would install:".style(self.ctx.styles.warning));
        for name in names {
            println!("    {}", format!("- {name}").style(self.ctx.styles.dim));
        }
    }

    /// Render installed and/or available items of one kind.
    pub fn render_listing(&self, listing: &KindListing, show_installed: bool, show_available: bool) {
        if self.ctx.quiet {
            return;
        }
        let styles = &self.ctx.styles;
        println!();
        println!("  {}", listing.kind.title().style(styles.header));
        println!("  {}", "━".repeat(RULE_WIDTH).style(styles.dim));

        if show_installed {
            println!();
            println!(
                "  {}",
                format!("Installed ({}):", listing.installed.len()).style(styles.success)
            );
            if listing.installed.is_empty() {
                println!("    {}", "None installed".style(styles.dim));
            } else {
                for item in &listing.installed {
                    println!(
                        "    {}",
                        format!("✓ {}", display_name(listing.kind, item)).style(styles.dim)
                    );
                }
            }
        }

        if show_available && !listing.available.is_empty() {
            println!();
            println!(
                "  {}",
                format!("Available ({}):", listing.available.len()).style(styles.info)
            );
            for item in &listing.available {
                let marker = if item.installed {
                    "✓".style(styles.success).to_string()
                } else {
                    "○".style(styles.dim).to_string()
                };
                let detail = item.detail.as_deref().unwrap_or("");
                println!("    {marker} {} - {}", item.name, detail.style(styles.dim));
            }
        }
    }

    /// Render installation counts, sizes and root directories.
    pub fn render_status(&self, report: &StatusReport) {
        if self.ctx.quiet {
            return;
        }
        let styles = &self.ctx.styles;
        self.ctx.banner("Installation Status");

        for kind in &report.kinds {
            println!();
            println!("  {}", format!("{}:", kind.kind.title()).style(styles.info));
            let count = match kind.kind {
                ItemKind::Reference => format!("{} projects", kind.installed.len()),
                _ => kind.installed.len().to_string(),
            };
            self.ctx.kv("  Installed:", &count);
            self.ctx.kv("  Size:     ", &format_bytes(kind.size));
            if !kind.installed.is_empty() {
                let label = match kind.kind {
                    ItemKind::Reference => "  Projects:",
                    _ => "  Recent:  ",
                };
                self.ctx.kv(label, "");
                for item in kind.recent() {
                    println!("      • {}", display_name(kind.kind, item));
                }
            }
        }

        println!();
        println!("  {}", "Total:".style(styles.header));
        self.ctx.kv("  Items:", &report.total_items().to_string());
        self.ctx.kv("  Size: ", &format_bytes(report.total_size()));

        println!();
        println!("  {}", "Directories:".style(styles.header));
        for kind in &report.kinds {
            let mark = if kind.root_exists {
                "✓".style(styles.success).to_string()
            } else {
                "✗".style(styles.error).to_string()
            };
            println!(
                "    {:<11}{mark} {}",
                format!("{}:", kind.kind.title()),
                kind.root.display()
            );
        }
        println!();
    }

    /// Render installation paths and the source repository.
    pub fn render_info(&self, config: &AppConfig) {
        if self.ctx.quiet {
            return;
        }
        let styles = &self.ctx.styles;
        let paths = &config.paths;
        println!();
        println!("  {}", "Installation Paths:".style(styles.header));
        println!("    {:<16}{}", "Agents:".style(styles.dim), paths.agents.display());
        println!("    {:<16}{}", "Documentation:".style(styles.dim), paths.docs.display());
        println!(
            "    {:<16}{}",
            "Reference Code:".style(styles.dim),
            paths.reference.display()
        );
        println!("    {:<16}{}", "Cache:".style(styles.dim), paths.cache.display());
        println!();
        println!("  {}", "GitHub Repository:".style(styles.header));
        println!("    {}", config.github.slug());
        println!("    {}", config.github.repo_url().style(styles.dim));
        println!();
    }
}

// ── Display helpers (used by tests and output layer) ─────────────────────────

/// Human-readable byte count: `512 B`, `2.0 KB`, `5.0 MB`.
///
/// The single decimal rounds half up, so 1280 bytes is `1.3 KB`.
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{} KB", tenths(bytes, KIB))
    } else {
        format!("{} MB", tenths(bytes, MIB))
    }
}

/// `bytes / unit` with one decimal, rounded half up in integer arithmetic.
fn tenths(bytes: u64, unit: u64) -> String {
    let unit = u128::from(unit);
    let scaled = (u128::from(bytes) * 10 + unit / 2) / unit;
    format!("{}.{}", scaled / 10, scaled % 10)
}

/// Installed leaf name as shown to users: agent and doc files lose `.md`.
#[must_use]
pub fn display_name(kind: ItemKind, leaf: &str) -> &str {
    match kind {
        ItemKind::Agents | ItemKind::Docs => leaf.strip_suffix(".md").unwrap_or(leaf),
        ItemKind::Reference => leaf,
    }
}
