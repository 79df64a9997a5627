//! Shared test doubles for unit tests.
//!
//! Provides an in-memory [`AssetSource`] keyed by URL and a reporter that
//! records every message, so each test file doesn't have to re-define the
//! same boilerplate.

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use claude_agents_cli::application::ports::{AssetSource, ProgressReporter};
use claude_agents_cli::domain::{AppConfig, AssetError, ItemKind};
use claude_agents_common::{AgentDescriptor, DocDescriptor, Manifest, ReferenceDescriptor};

// ── Manifest helpers ─────────────────────────────────────────────────────────

pub fn agent(name: &str, description: &str) -> AgentDescriptor {
    AgentDescriptor {
        name: name.to_string(),
        filename: format!("{name}.md"),
        description: Some(description.to_string()),
        category: None,
    }
}

pub fn doc(name: &str, filename: &str, category: &str) -> DocDescriptor {
    DocDescriptor {
        name: name.to_string(),
        filename: filename.to_string(),
        description: None,
        category: Some(category.to_string()),
    }
}

pub fn reference(name: &str, files: &[&str]) -> ReferenceDescriptor {
    ReferenceDescriptor {
        name: name.to_string(),
        files: files.iter().map(ToString::to_string).collect(),
        description: Some(format!("{name} example")),
    }
}

/// Two agents, two docs and one reference project.
pub fn sample_manifest() -> Manifest {
    Manifest {
        agents: vec![
            agent("reviewer", "Reviews code"),
            agent("planner", "Plans work"),
        ],
        docs: vec![
            doc("Rust Guide", "rust-guide.md", "languages"),
            doc("Testing Handbook", "testing.md", "practices"),
        ],
        reference: vec![reference("api", &["src/main.rs", "README.md"])],
    }
}

// ── Mock: in-memory asset source ─────────────────────────────────────────────

/// Serves a fixed manifest and the bodies registered per URL. Unregistered
/// URLs fail like an HTTP 404.
pub struct MemorySource {
    manifest: Option<Manifest>,
    files: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl MemorySource {
    /// A source serving `manifest` with a body for every file it names.
    pub fn serving(config: &AppConfig, manifest: Manifest) -> Self {
        let mut files = HashMap::new();
        for a in &manifest.agents {
            files.insert(
                config.github.asset_url(ItemKind::Agents, &a.filename),
                format!("# {}\n", a.name).into_bytes(),
            );
        }
        for d in &manifest.docs {
            files.insert(
                config.github.asset_url(ItemKind::Docs, &d.filename),
                format!("# {}\n", d.name).into_bytes(),
            );
        }
        for r in &manifest.reference {
            for file in &r.files {
                files.insert(
                    config
                        .github
                        .asset_url(ItemKind::Reference, &format!("{}/{file}", r.name)),
                    format!("// {}/{file}\n", r.name).into_bytes(),
                );
            }
        }
        Self {
            manifest: Some(manifest),
            files,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// A source whose manifest request fails like an HTTP 500.
    pub fn unavailable() -> Self {
        Self {
            manifest: None,
            files: HashMap::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Replace the body served at `url`.
    pub fn with_body(mut self, url: String, body: &[u8]) -> Self {
        self.files.insert(url, body.to_vec());
        self
    }

    /// Make `url` fail like an HTTP 404.
    pub fn without(mut self, url: &str) -> Self {
        self.files.remove(url);
        self
    }

    /// Asset URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl AssetSource for MemorySource {
    async fn fetch_manifest(&self) -> Result<Manifest> {
        match &self.manifest {
            Some(manifest) => Ok(manifest.clone()),
            None => Err(AssetError::ManifestUnavailable {
                reason: "HTTP 500 Internal Server Error".to_string(),
            }
            .into()),
        }
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        self.files.get(url).cloned().ok_or_else(|| {
            AssetError::DownloadFailed {
                url: url.to_string(),
                status: Some(404),
                reason: "Not Found".to_string(),
            }
            .into()
        })
    }
}

// ── Mock: recording reporter ─────────────────────────────────────────────────

/// Records every reported message with its level.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: RefCell<Vec<(&'static str, String)>>,
}

impl RecordingReporter {
    pub fn messages(&self, level: &str) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.events.borrow_mut().push(("step", message.to_string()));
    }
    fn progress(&self, current: usize, total: usize, message: &str) {
        self.events
            .borrow_mut()
            .push(("progress", format!("{current}/{total} {message}")));
    }
    fn success(&self, message: &str) {
        self.events.borrow_mut().push(("success", message.to_string()));
    }
    fn warn(&self, message: &str) {
        self.events.borrow_mut().push(("warn", message.to_string()));
    }
}

// ── Filesystem helpers ───────────────────────────────────────────────────────

/// A temporary home directory and the config rooted at it.
pub fn temp_home() -> (tempfile::TempDir, AppConfig) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = AppConfig::from_home(dir.path());
    (dir, config)
}

/// Sorted entry names directly under `dir`, hidden ones included.
pub fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|rd| {
            rd.filter_map(std::result::Result::ok)
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
