//! Application service — removal of installed items.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::Result;

use crate::application::ports::{LocalStore, ProgressReporter};
use crate::domain::{AppConfig, AssetError, ItemKind, select};

/// Options for `remove`.
#[derive(Debug, Clone, Default)]
pub struct RemoveOptions {
    /// Filter terms matched against installed leaf names.
    pub terms: Vec<String>,
    /// Remove every installed item of the kind.
    pub all: bool,
}

/// Result of removing one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveReport {
    pub kind: ItemKind,
    /// Leaf names selected for removal, in enumeration order.
    pub removed: Vec<String>,
}

/// Refuse ambiguous invocations: a removal needs `--all` or at least one
/// filter term.
///
/// # Errors
///
/// `AssetError::MissingArgument` when neither is given.
pub fn ensure_selection(opts: &RemoveOptions) -> Result<(), AssetError> {
    if opts.all || !opts.terms.is_empty() {
        Ok(())
    } else {
        Err(AssetError::MissingArgument(
            "Please specify --all or --filter to remove items".to_string(),
        ))
    }
}

/// Installed leaf names under the kind's root that `opts` selects.
#[must_use]
pub fn selection(installed: Vec<String>, kind: ItemKind, opts: &RemoveOptions) -> Vec<String> {
    if opts.all {
        installed
    } else {
        select(kind, &opts.terms, installed, String::as_str)
    }
}

/// Remove the selected installed items of one kind.
///
/// # Errors
///
/// Returns an error if deleting an entry fails for a reason other than it
/// already being gone.
pub fn remove_kind(
    store: &impl LocalStore,
    reporter: &impl ProgressReporter,
    config: &AppConfig,
    kind: ItemKind,
    opts: &RemoveOptions,
) -> Result<RemoveReport> {
    let root = config.root_for(kind);
    let installed = store.list_installed(root);

    if installed.is_empty() {
        reporter.warn(&format!("No {} installed", kind.mass_noun()));
        return Ok(RemoveReport {
            kind,
            removed: Vec::new(),
        });
    }

    let targets = selection(installed, kind, opts);
    if targets.is_empty() {
        reporter.warn(&format!("No matching {} to remove", kind.mass_noun()));
        return Ok(RemoveReport {
            kind,
            removed: Vec::new(),
        });
    }

    reporter.step(&format!("Removing {} {}...", targets.len(), kind.noun()));
    for item in &targets {
        store.remove(&root.join(item))?;
        reporter.success(&format!("Removed {item}"));
    }
    reporter.success(&format!(
        "Successfully removed {} {}",
        targets.len(),
        kind.noun()
    ));

    Ok(RemoveReport {
        kind,
        removed: targets,
    })
}
