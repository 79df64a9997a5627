//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::fs`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::kind::VALID_TYPES;

/// Errors raised while fetching, planning, or applying asset changes.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to fetch manifest ({reason}). Repository might not be set up yet.")]
    ManifestUnavailable { reason: String },

    #[error("Manifest is malformed: {0}")]
    MalformedManifest(String),

    #[error("Failed to download {url}: {}", download_detail(.status, .reason))]
    DownloadFailed {
        url: String,
        /// HTTP status when the server answered, `None` for transport failures.
        status: Option<u16>,
        reason: String,
    },

    #[error("{count} download(s) failed")]
    DownloadsFailed { count: usize },

    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid type: {0}\nValid types: {valid}", valid = VALID_TYPES)]
    InvalidType(String),

    #[error("{0}")]
    MissingArgument(String),
}

impl AssetError {
    /// Wrap an I/O error with the path it happened on.
    #[must_use]
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

#[allow(clippy::ref_option)]
fn download_detail(status: &Option<u16>, reason: &str) -> String {
    match (*status, reason.is_empty()) {
        (Some(code), true) => format!("HTTP {code}"),
        (Some(code), false) => format!("HTTP {code} {reason}"),
        (None, _) => reason.to_string(),
    }
}
