use std::path::{Component, Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems found while validating a decoded manifest.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("{section}[{index}] has an empty name")]
    EmptyName { section: &'static str, index: usize },

    #[error("{section} entry '{name}' has an empty filename")]
    EmptyFilename { section: &'static str, name: String },

    #[error("{section} entry '{name}' has an unsafe path: {path}")]
    UnsafePath {
        section: &'static str,
        name: String,
        path: String,
    },
}

/// Remote index of everything the installer can fetch.
///
/// Sections missing from the JSON document decode as empty lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    #[serde(default)]
    pub agents: Vec<AgentDescriptor>,
    #[serde(default)]
    pub docs: Vec<DocDescriptor>,
    #[serde(default)]
    pub reference: Vec<ReferenceDescriptor>,
}

/// A single agent definition file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentDescriptor {
    pub name: String,
    /// Leaf name written under the agents root.
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A single documentation file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocDescriptor {
    pub name: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A reference project: a directory named after `name` holding `files`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceDescriptor {
    pub name: String,
    /// Paths relative to the project directory, downloaded in this order.
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Manifest {
    /// Check every entry for empty keys and paths that would escape the
    /// target directory.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (index, agent) in self.agents.iter().enumerate() {
            check_leaf("agents", index, &agent.name, &agent.filename)?;
        }
        for (index, doc) in self.docs.iter().enumerate() {
            check_leaf("docs", index, &doc.name, &doc.filename)?;
        }
        for (index, project) in self.reference.iter().enumerate() {
            check_name("reference", index, &project.name)?;
            check_relative("reference", &project.name, &project.name)?;
            for file in &project.files {
                check_relative("reference", &project.name, file)?;
            }
        }
        Ok(())
    }
}

fn check_name(section: &'static str, index: usize, name: &str) -> Result<(), ManifestError> {
    if name.trim().is_empty() {
        return Err(ManifestError::EmptyName { section, index });
    }
    Ok(())
}

fn check_leaf(
    section: &'static str,
    index: usize,
    name: &str,
    filename: &str,
) -> Result<(), ManifestError> {
    check_name(section, index, name)?;
    if filename.trim().is_empty() {
        return Err(ManifestError::EmptyFilename {
            section,
            name: name.to_string(),
        });
    }
    check_relative(section, name, filename)
}

/// Only plain relative components are accepted.
fn check_relative(section: &'static str, name: &str, path: &str) -> Result<(), ManifestError> {
    let components: Vec<_> = Path::new(path).components().collect();
    let safe = components
        .iter()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && components.iter().any(|c| matches!(c, Component::Normal(_)));
    if safe {
        Ok(())
    } else {
        Err(ManifestError::UnsafePath {
            section,
            name: name.to_string(),
            path: path.to_string(),
        })
    }
}
