//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and the shared manifest
//! types — never from `crate::infra`, `crate::commands`, or `crate::output`.

use std::path::Path;

use anyhow::Result;
use claude_agents_common::Manifest;

// ── Remote Source Port ────────────────────────────────────────────────────────

/// Where the manifest and asset bytes come from.
#[allow(async_fn_in_trait)]
pub trait AssetSource {
    /// Fetch and validate the manifest.
    ///
    /// # Errors
    ///
    /// `AssetError::ManifestUnavailable` when the request fails or the server
    /// answers with a non-success status, `AssetError::MalformedManifest`
    /// when the body does not decode or validate.
    async fn fetch_manifest(&self) -> Result<Manifest>;

    /// Fetch the full content at `url` into memory.
    ///
    /// # Errors
    ///
    /// `AssetError::DownloadFailed` on a transport failure or non-success status.
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Local filesystem operations. The filesystem is the only installed-state record.
pub trait LocalStore {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents. Succeeds if it already exists.
    ///
    /// # Errors
    ///
    /// `AssetError::Filesystem` if the directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Names of the entries directly under `dir`, skipping dotfiles, in the
    /// order the OS enumerates them. A missing or unreadable `dir` is empty.
    fn list_installed(&self, dir: &Path) -> Vec<String>;

    /// Write `content` to `path`, creating parent directories and replacing
    /// any existing file.
    ///
    /// # Errors
    ///
    /// `AssetError::Filesystem` if a directory or the file cannot be written.
    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()>;

    /// Delete a file, or a directory recursively. A path that is already gone
    /// is not an error.
    ///
    /// # Errors
    ///
    /// `AssetError::Filesystem` if deletion fails for any other reason.
    fn remove(&self, path: &Path) -> Result<()>;

    /// Total size in bytes of the non-hidden files under `path`. Unreadable
    /// entries count as zero.
    fn size_of(&self, path: &Path) -> u64;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Report that item `current` of `total` is about to be processed.
    fn progress(&self, current: usize, total: usize, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
