//! Remote source infrastructure — implements `AssetSource` over GitHub raw
//! content with `reqwest`.

use anyhow::Result;
use claude_agents_common::Manifest;
use reqwest::StatusCode;

use crate::application::ports::AssetSource;
use crate::domain::{AssetError, GithubSource};

/// Fetches the manifest and assets from the configured GitHub repository.
pub struct GithubAssetSource {
    client: reqwest::Client,
    github: GithubSource,
}

impl GithubAssetSource {
    /// Build a client for `github`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised (TLS backend).
    pub fn new(github: GithubSource) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("claude-agents/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, github })
    }
}

impl AssetSource for GithubAssetSource {
    async fn fetch_manifest(&self) -> Result<Manifest> {
        let url = self.github.manifest_url();
        tracing::debug!(%url, "fetching manifest");

        let unavailable = |reason: String| AssetError::ManifestUnavailable { reason };
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(describe_status(status)).into());
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| unavailable(e.to_string()))?;
        Ok(parse_manifest(&body)?)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!(%url, "downloading asset");

        let failed = |status: Option<StatusCode>, reason: String| AssetError::DownloadFailed {
            url: url.to_string(),
            status: status.map(|s| s.as_u16()),
            reason,
        };
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| failed(None, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            return Err(failed(Some(status), reason).into());
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| failed(None, e.to_string()))?;
        Ok(body.to_vec())
    }
}

/// Decode and validate a manifest body.
///
/// # Errors
///
/// `AssetError::MalformedManifest` if the JSON does not match the manifest
/// shape or an entry fails validation.
pub fn parse_manifest(body: &[u8]) -> Result<Manifest, AssetError> {
    let manifest: Manifest = serde_json::from_slice(body)
        .map_err(|e| AssetError::MalformedManifest(e.to_string()))?;
    manifest
        .validate()
        .map_err(|e| AssetError::MalformedManifest(e.to_string()))?;
    Ok(manifest)
}

fn describe_status(status: StatusCode) -> String {
    format!("HTTP {status}")
}
