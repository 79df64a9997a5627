//! Application service — installed vs available listing.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use claude_agents_common::Manifest;

use crate::application::ports::{AssetSource, LocalStore};
use crate::domain::{AppConfig, ItemKind};

/// One manifest entry as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableItem {
    pub name: String,
    /// Description for agents and reference code, category for docs.
    pub detail: Option<String>,
    pub installed: bool,
}

/// Listing for one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindListing {
    pub kind: ItemKind,
    pub installed: Vec<String>,
    /// Empty when the manifest could not be fetched.
    pub available: Vec<AvailableItem>,
}

/// Fetch the manifest for display purposes, degrading to `None` on failure
/// so local state can still be listed offline.
pub async fn fetch_available(source: &impl AssetSource) -> Option<Manifest> {
    match source.fetch_manifest().await {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            tracing::info!(error = %format!("{e:#}"), "manifest unavailable, listing local items only");
            None
        }
    }
}

/// Combine local state for `kind` with the manifest, if any.
#[must_use]
pub fn build_listing(
    store: &impl LocalStore,
    config: &AppConfig,
    kind: ItemKind,
    manifest: Option<&Manifest>,
) -> KindListing {
    let installed = store.list_installed(config.root_for(kind));
    let is_installed = |leaf: &str| installed.iter().any(|i| i == leaf);

    let available = manifest
        .map(|m| match kind {
            ItemKind::Agents => m
                .agents
                .iter()
                .map(|a| AvailableItem {
                    name: a.name.clone(),
                    detail: a.description.clone(),
                    installed: is_installed(&a.filename),
                })
                .collect(),
            ItemKind::Docs => m
                .docs
                .iter()
                .map(|d| AvailableItem {
                    name: d.name.clone(),
                    detail: d.category.clone(),
                    installed: is_installed(&d.filename),
                })
                .collect(),
            ItemKind::Reference => m
                .reference
                .iter()
                .map(|r| AvailableItem {
                    name: r.name.clone(),
                    detail: r.description.clone(),
                    installed: is_installed(&r.name),
                })
                .collect(),
        })
        .unwrap_or_default();

    KindListing {
        kind,
        installed,
        available,
    }
}
