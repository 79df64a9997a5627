//! Item kinds and the `type` argument accepted by every command.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::AssetError;

/// Human list of accepted `type` values, used in error messages.
pub const VALID_TYPES: &str = "agents, docs, reference, all";

/// A storage category. Each kind owns one target root directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Agents,
    Docs,
    Reference,
}

impl ItemKind {
    /// Every storage kind, in the order "all" expands to.
    pub const ALL: [ItemKind; 3] = [ItemKind::Agents, ItemKind::Docs, ItemKind::Reference];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Agents => "agents",
            ItemKind::Docs => "docs",
            ItemKind::Reference => "reference",
        }
    }

    /// Section title used by `list` and `status`.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ItemKind::Agents => "Agents",
            ItemKind::Docs => "Documentation",
            ItemKind::Reference => "Reference Code",
        }
    }

    /// Plural noun for counted messages ("Installing 3 agents...").
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            ItemKind::Agents => "agents",
            ItemKind::Docs => "documentation files",
            ItemKind::Reference => "reference projects",
        }
    }

    /// Mass noun for "No ... installed" style messages.
    #[must_use]
    pub fn mass_noun(self) -> &'static str {
        match self {
            ItemKind::Agents => "agents",
            ItemKind::Docs => "documentation",
            ItemKind::Reference => "reference code",
        }
    }

    /// Whether `term` selects an item called `candidate`.
    ///
    /// Agents and reference projects need an exact name; docs match on a
    /// case-insensitive substring.
    #[must_use]
    pub fn matches(self, term: &str, candidate: &str) -> bool {
        match self {
            ItemKind::Agents | ItemKind::Reference => term == candidate,
            ItemKind::Docs => candidate.to_lowercase().contains(&term.to_lowercase()),
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parsed `type` argument: one kind, or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSelector {
    One(ItemKind),
    All,
}

impl TypeSelector {
    /// Expand to concrete kinds; "all" becomes agents, docs, reference.
    #[must_use]
    pub fn kinds(self) -> Vec<ItemKind> {
        match self {
            TypeSelector::One(kind) => vec![kind],
            TypeSelector::All => ItemKind::ALL.to_vec(),
        }
    }
}

impl FromStr for TypeSelector {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agents" => Ok(TypeSelector::One(ItemKind::Agents)),
            "docs" => Ok(TypeSelector::One(ItemKind::Docs)),
            "reference" => Ok(TypeSelector::One(ItemKind::Reference)),
            "all" => Ok(TypeSelector::All),
            other => Err(AssetError::InvalidType(other.to_string())),
        }
    }
}
