//! Application service — manifest-driven install (the sync engine).
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::{Path, PathBuf};

use anyhow::Result;
use claude_agents_common::Manifest;

use crate::application::ports::{AssetSource, LocalStore, ProgressReporter};
use crate::domain::{AppConfig, GithubSource, ItemKind, select};

// ── Public types ──────────────────────────────────────────────────────────────

/// What to do when one item fails to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the whole run at the first failed download.
    #[default]
    AbortOnFirst,
    /// Record the failure and carry on with the next item.
    Continue,
}

/// Options shared by `install` and `update`.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Filter terms; empty means every manifest entry.
    pub terms: Vec<String>,
    /// Overrides the target root of every kind in the run.
    pub dir: Option<PathBuf>,
    /// Overwrite items that already exist.
    pub force: bool,
    /// Report the candidates and stop.
    pub dry_run: bool,
    pub policy: FailurePolicy,
}

/// One manifest entry resolved against the local target root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedItem {
    pub name: String,
    /// Path whose existence means "installed": the file for agents and docs,
    /// the project directory for reference code.
    pub dest: PathBuf,
    /// `(url, path)` pairs fetched in order.
    pub files: Vec<(String, PathBuf)>,
}

/// Result of a completed (non dry-run) install for one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub kind: ItemKind,
    pub target: PathBuf,
    /// Number of candidates processed, including skipped ones.
    pub candidates: usize,
    pub installed: usize,
    pub skipped: usize,
    /// Names of items whose download failed under `FailurePolicy::Continue`.
    pub failed: Vec<String>,
}

/// Outcome of `install_kind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Dry run: the names that would have been installed.
    DryRun { names: Vec<String> },
    Completed(InstallReport),
}

// ── Planning ──────────────────────────────────────────────────────────────────

/// Resolve the manifest section for `kind` into planned items under `root`.
///
/// With no terms every entry is a candidate; otherwise only entries whose
/// name matches under the kind's rule. Manifest order is kept.
#[must_use]
pub fn plan(
    manifest: &Manifest,
    github: &GithubSource,
    kind: ItemKind,
    root: &Path,
    terms: &[String],
) -> Vec<PlannedItem> {
    match kind {
        ItemKind::Agents => {
            let entries: Vec<_> = manifest
                .agents
                .iter()
                .map(|a| (a.name.as_str(), a.filename.as_str()))
                .collect();
            plan_files(github, kind, root, terms, entries)
        }
        ItemKind::Docs => {
            let entries: Vec<_> = manifest
                .docs
                .iter()
                .map(|d| (d.name.as_str(), d.filename.as_str()))
                .collect();
            plan_files(github, kind, root, terms, entries)
        }
        ItemKind::Reference => {
            let projects: Vec<_> = manifest.reference.iter().collect();
            let projects = if terms.is_empty() {
                projects
            } else {
                select(kind, terms, projects, |p| p.name.as_str())
            };
            projects
                .into_iter()
                .map(|project| {
                    let dest = root.join(&project.name);
                    let files = project
                        .files
                        .iter()
                        .map(|file| {
                            (
                                github.asset_url(kind, &format!("{}/{file}", project.name)),
                                dest.join(file),
                            )
                        })
                        .collect();
                    PlannedItem {
                        name: project.name.clone(),
                        dest,
                        files,
                    }
                })
                .collect()
        }
    }
}

fn plan_files(
    github: &GithubSource,
    kind: ItemKind,
    root: &Path,
    terms: &[String],
    entries: Vec<(&str, &str)>,
) -> Vec<PlannedItem> {
    let entries = if terms.is_empty() {
        entries
    } else {
        select(kind, terms, entries, |(name, _)| *name)
    };
    entries
        .into_iter()
        .map(|(name, filename)| {
            let dest = root.join(filename);
            PlannedItem {
                name: name.to_string(),
                files: vec![(github.asset_url(kind, filename), dest.clone())],
                dest,
            }
        })
        .collect()
}

// ── Execution ─────────────────────────────────────────────────────────────────

/// Install the items of one kind.
///
/// Steps:
/// 1. Ensure the target root exists (not on dry run)
/// 2. Fetch the manifest — failure aborts
/// 3. Select candidates with the filter
/// 4. Dry run: return the candidate names
/// 5. Download each candidate in order, skipping existing ones unless forced
///
/// # Errors
///
/// Returns an error if the manifest is unavailable or malformed, the target
/// root cannot be created, or a download/write fails under
/// `FailurePolicy::AbortOnFirst`.
pub async fn install_kind(
    source: &impl AssetSource,
    store: &impl LocalStore,
    reporter: &impl ProgressReporter,
    config: &AppConfig,
    kind: ItemKind,
    opts: &InstallOptions,
) -> Result<InstallOutcome> {
    let root = opts
        .dir
        .clone()
        .unwrap_or_else(|| config.root_for(kind).to_path_buf());

    if !opts.dry_run {
        store.create_dir_all(&root)?;
    }

    reporter.step("Fetching manifest...");
    let manifest = source.fetch_manifest().await?;
    let items = plan(&manifest, &config.github, kind, &root, &opts.terms);

    if opts.dry_run {
        return Ok(InstallOutcome::DryRun {
            names: items.into_iter().map(|item| item.name).collect(),
        });
    }

    let total = items.len();
    reporter.step(&format!("Installing {total} {}...", kind.noun()));

    let mut report = InstallReport {
        kind,
        target: root,
        candidates: total,
        installed: 0,
        skipped: 0,
        failed: Vec::new(),
    };

    for (index, item) in items.iter().enumerate() {
        if store.exists(&item.dest) && !opts.force {
            tracing::debug!(item = %item.name, dest = %item.dest.display(), "skipping existing item");
            reporter.warn(&format!(
                "{} already exists (use --force to overwrite)",
                item.name
            ));
            report.skipped += 1;
            continue;
        }

        reporter.progress(index + 1, total, &format!("Installing {}", item.name));
        match fetch_item(source, store, item).await {
            Ok(()) => report.installed += 1,
            Err(e) => match opts.policy {
                FailurePolicy::AbortOnFirst => return Err(e),
                FailurePolicy::Continue => {
                    reporter.warn(&format!("{}: {e:#}", item.name));
                    report.failed.push(item.name.clone());
                }
            },
        }
    }

    if report.failed.is_empty() {
        reporter.success(&format!(
            "Successfully installed {total} {} to {}",
            kind.noun(),
            report.target.display()
        ));
    } else {
        reporter.warn(&format!(
            "Installed {} of {total} {} to {} ({} failed)",
            report.installed,
            kind.noun(),
            report.target.display(),
            report.failed.len()
        ));
    }

    Ok(InstallOutcome::Completed(report))
}

async fn fetch_item(
    source: &impl AssetSource,
    store: &impl LocalStore,
    item: &PlannedItem,
) -> Result<()> {
    for (url, path) in &item.files {
        let content = source.download(url).await?;
        store.write_file(path, &content)?;
    }
    Ok(())
}
