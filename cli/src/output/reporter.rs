//! `TerminalReporter` — Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` prints `"  → {message}"`
/// - `progress()` drives an indicatif bar on a TTY, or prints
///   `"  [current/total] {message}"` otherwise
/// - `success()` prints `"  ✓ {message}"`
/// - `warn()` prints `"  ⚠ {message}"`
///
/// Everything is suppressed when `ctx.quiet`. Lines printed while a bar is
/// active go above it.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    bar: RefCell<Option<ProgressBar>>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            bar: RefCell::new(None),
        }
    }

    fn emit(&self, line: &str) {
        if self.ctx.quiet {
            return;
        }
        match self.bar.borrow().as_ref() {
            Some(pb) => pb.println(line),
            None => println!("{line}"),
        }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        self.emit(&format!("  {} {message}", "→".style(self.ctx.styles.info)));
    }

    fn progress(&self, current: usize, total: usize, message: &str) {
        if self.ctx.quiet {
            return;
        }
        if !self.ctx.show_progress() {
            println!("  [{current}/{total}] {message}");
            return;
        }
        let len = u64::try_from(total).unwrap_or(u64::MAX);
        let pos = u64::try_from(current).unwrap_or(u64::MAX);
        let mut slot = self.bar.borrow_mut();
        let pb = slot.get_or_insert_with(|| progress::bar(len, ""));
        pb.set_length(len);
        pb.set_position(pos);
        pb.set_message(message.to_string());
    }

    fn success(&self, message: &str) {
        if let Some(pb) = self.bar.borrow_mut().take() {
            if !self.ctx.quiet {
                progress::finish_success(&pb, message);
                return;
            }
        }
        self.emit(&format!("  {} {message}", "✓".style(self.ctx.styles.success)));
    }

    fn warn(&self, message: &str) {
        self.emit(&format!("  {} {message}", "⚠".style(self.ctx.styles.warning)));
    }
}

impl Drop for TerminalReporter<'_> {
    // A run that failed or ended with warnings leaves its bar as drawn.
    fn drop(&mut self) {
        if let Some(pb) = self.bar.get_mut().take() {
            pb.abandon();
        }
    }
}
