//! Role kinds, capabilities, and drag-and-drop panels for circdesk.
//!
//! All enums serialize with the exact strings the admin console exchanges
//! with the server (`kebab-case`), and expose `as_str()` plus `Display`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// RoleKind
// ---------------------------------------------------------------------------

/// The `role` string of a `{role, library?}` record.
///
/// `Manager` and `Librarian` are scoped to one library; the other kinds are
/// global and never carry a library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum RoleKind {
    System,
    ManagerAll,
    LibrarianAll,
    Manager,
    Librarian,
}

impl RoleKind {
    pub const ALL: [Self; 5] = [
        Self::System,
        Self::ManagerAll,
        Self::LibrarianAll,
        Self::Manager,
        Self::Librarian,
    ];

    /// Whether records of this kind must name a library.
    #[must_use]
    pub const fn is_library_scoped(self) -> bool {
        matches!(self, Self::Manager | Self::Librarian)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::ManagerAll => "manager-all",
            Self::LibrarianAll => "librarian-all",
            Self::Manager => "manager",
            Self::Librarian => "librarian",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::InvalidRole {
                role: s.to_string(),
                library: None,
                reason: "unknown role".to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// A capability that a role set may grant, optionally for one library.
///
/// ```text
/// system ⊃ manager ⊃ librarian
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    System,
    Manager,
    Librarian,
}

impl Capability {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Manager => "manager",
            Self::Librarian => "librarian",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Droppable
// ---------------------------------------------------------------------------

/// One of the two drag-and-drop panels of the custom list editor.
///
/// ```text
/// search-results ⇄ custom-list-entries
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Droppable {
    SearchResults,
    #[serde(rename = "custom-list-entries")]
    ListEntries,
}

impl Droppable {
    /// The panel a drag from `self` is allowed to drop onto.
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::SearchResults => Self::ListEntries,
            Self::ListEntries => Self::SearchResults,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchResults => "search-results",
            Self::ListEntries => "custom-list-entries",
        }
    }
}

impl fmt::Display for Droppable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Droppable {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search-results" => Ok(Self::SearchResults),
            "custom-list-entries" => Ok(Self::ListEntries),
            other => Err(CoreError::InvalidDroppable(other.to_string())),
        }
    }
}
