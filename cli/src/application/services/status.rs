//! Application service — offline installation status.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::PathBuf;

use crate::application::ports::LocalStore;
use crate::domain::{AppConfig, ItemKind};

/// How many names `KindStatus::recent` shows.
pub const RECENT_LIMIT: usize = 3;

/// Installed state of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindStatus {
    pub kind: ItemKind,
    pub root: PathBuf,
    pub root_exists: bool,
    pub installed: Vec<String>,
    /// Bytes used by the non-hidden files under `root`.
    pub size: u64,
}

impl KindStatus {
    /// The first few installed names, in enumeration order.
    #[must_use]
    pub fn recent(&self) -> &[String] {
        &self.installed[..self.installed.len().min(RECENT_LIMIT)]
    }
}

/// Status of every kind, in agents, docs, reference order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub kinds: Vec<KindStatus>,
}

impl StatusReport {
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.kinds.iter().map(|k| k.installed.len()).sum()
    }

    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.kinds.iter().map(|k| k.size).sum()
    }
}

/// Collect counts, sizes and root existence for every kind. Read-only and
/// offline.
#[must_use]
pub fn collect_status(store: &impl LocalStore, config: &AppConfig) -> StatusReport {
    let kinds = ItemKind::ALL
        .iter()
        .map(|&kind| {
            let root = config.root_for(kind).to_path_buf();
            KindStatus {
                kind,
                root_exists: store.exists(&root),
                installed: store.list_installed(&root),
                size: store.size_of(&root),
                root,
            }
        })
        .collect();
    StatusReport { kinds }
}
