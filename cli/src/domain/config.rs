//! Installer configuration: local target roots and the remote asset source.
//!
//! Pure functions only — no I/O, no async, no filesystem access. The value is
//! built once at startup and handed to every component that needs it.

use std::path::{Path, PathBuf};

use crate::domain::kind::ItemKind;

// ── Constants ────────────────────────────────────────────────────────────────

pub const GITHUB_OWNER: &str = "phyter1";
pub const GITHUB_REPO: &str = "claude-code-assets";
pub const GITHUB_BRANCH: &str = "main";
pub const GITHUB_RAW_BASE: &str = "https://raw.githubusercontent.com";

// ── Config schema ────────────────────────────────────────────────────────────

/// Local directories, all under `~/.claude`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub agents: PathBuf,
    pub docs: PathBuf,
    pub reference: PathBuf,
    /// Declared for compatibility; nothing reads or writes it.
    pub cache: PathBuf,
}

impl AssetPaths {
    /// Standard layout rooted at `home`.
    #[must_use]
    pub fn under(home: &Path) -> Self {
        let claude = home.join(".claude");
        Self {
            agents: claude.join("agents"),
            docs: claude.join("docs"),
            reference: claude.join("reference_code"),
            cache: claude.join(".installer-cache"),
        }
    }
}

/// Repository the manifest and assets are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubSource {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub raw_base: String,
}

impl Default for GithubSource {
    fn default() -> Self {
        Self {
            owner: GITHUB_OWNER.to_string(),
            repo: GITHUB_REPO.to_string(),
            branch: GITHUB_BRANCH.to_string(),
            raw_base: GITHUB_RAW_BASE.to_string(),
        }
    }
}

impl GithubSource {
    /// `owner/repo`, as shown by `info`.
    #[must_use]
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Web URL of the repository.
    #[must_use]
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}", self.slug())
    }

    /// Raw-content URL for a path inside the repository at the configured branch.
    #[must_use]
    pub fn raw_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{path}",
            self.raw_base, self.owner, self.repo, self.branch
        )
    }

    #[must_use]
    pub fn manifest_url(&self) -> String {
        self.raw_url("manifest.json")
    }

    /// Remote URL of one asset file.
    ///
    /// `relative` is the descriptor's `filename` for agents and docs, and
    /// `{project}/{file}` for reference code.
    #[must_use]
    pub fn asset_url(&self, kind: ItemKind, relative: &str) -> String {
        let folder = match kind {
            ItemKind::Agents => "agents",
            ItemKind::Docs => "docs",
            ItemKind::Reference => "reference_code",
        };
        self.raw_url(&format!("assets/{folder}/{relative}"))
    }
}

/// Immutable installer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub paths: AssetPaths,
    pub github: GithubSource,
}

impl AppConfig {
    /// Default configuration for the given home directory.
    #[must_use]
    pub fn from_home(home: &Path) -> Self {
        Self {
            paths: AssetPaths::under(home),
            github: GithubSource::default(),
        }
    }

    /// Target root for `kind`.
    #[must_use]
    pub fn root_for(&self, kind: ItemKind) -> &Path {
        match kind {
            ItemKind::Agents => &self.paths.agents,
            ItemKind::Docs => &self.paths.docs,
            ItemKind::Reference => &self.paths.reference,
        }
    }
}
