//! Admin roles and their wire records.
//!
//! On the wire a role is a `{role, library?}` record (see [`RoleRecord`]).
//! In memory it is the tagged [`Role`] enum, so that a library can only be
//! attached to the per-library kinds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Capability, RoleKind};
use crate::errors::CoreError;

/// A single grant held by an admin account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RoleRecord", into = "RoleRecord")]
pub enum Role {
    System,
    ManagerAll,
    LibrarianAll,
    Manager(String),
    Librarian(String),
}

impl Role {
    #[must_use]
    pub const fn kind(&self) -> RoleKind {
        match self {
            Self::System => RoleKind::System,
            Self::ManagerAll => RoleKind::ManagerAll,
            Self::LibrarianAll => RoleKind::LibrarianAll,
            Self::Manager(_) => RoleKind::Manager,
            Self::Librarian(_) => RoleKind::Librarian,
        }
    }

    /// The library a per-library role is scoped to.
    #[must_use]
    pub fn library(&self) -> Option<&str> {
        match self {
            Self::Manager(library) | Self::Librarian(library) => Some(library),
            Self::System | Self::ManagerAll | Self::LibrarianAll => None,
        }
    }

    /// Whether this role alone grants `capability`.
    ///
    /// With `library = None` the question is about the blanket grant, which
    /// only `System`, `ManagerAll` and `LibrarianAll` can satisfy.
    #[must_use]
    pub fn grants(&self, capability: Capability, library: Option<&str>) -> bool {
        match (self, capability) {
            (Self::System, _) => true,
            (_, Capability::System) => false,
            (Self::ManagerAll, Capability::Manager | Capability::Librarian)
            | (Self::LibrarianAll, Capability::Librarian) => true,
            (Self::LibrarianAll, Capability::Manager) => false,
            (Self::Manager(own), Capability::Manager | Capability::Librarian)
            | (Self::Librarian(own), Capability::Librarian) => library == Some(own.as_str()),
            (Self::Librarian(_), Capability::Manager) => false,
        }
    }

    /// Whether holding `self` makes holding a distinct `other` redundant.
    #[must_use]
    pub fn implies(&self, other: &Self) -> bool {
        if self == other {
            return false;
        }
        match self {
            Self::System => true,
            Self::ManagerAll => !matches!(other, Self::System),
            Self::LibrarianAll => matches!(other, Self::Librarian(_)),
            Self::Manager(own) => matches!(other, Self::Librarian(lib) if lib == own),
            Self::Librarian(_) => false,
        }
    }

    #[must_use]
    pub fn to_record(&self) -> RoleRecord {
        RoleRecord {
            role: self.kind().as_str().to_string(),
            library: self.library().map(str::to_string),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.library() {
            Some(library) => write!(f, "{}-{library}", self.kind()),
            None => f.write_str(self.kind().as_str()),
        }
    }
}

/// Wire form of a [`Role`]: `{"role": "manager", "library": "nypl"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoleRecord {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
}

impl TryFrom<RoleRecord> for Role {
    type Error = CoreError;

    fn try_from(record: RoleRecord) -> Result<Self, Self::Error> {
        let RoleRecord { role, library } = record;
        let invalid = |reason: &str| CoreError::InvalidRole {
            role: role.clone(),
            library: library.clone(),
            reason: reason.to_string(),
        };

        let Ok(kind) = role.parse::<RoleKind>() else {
            return Err(invalid("unknown role"));
        };

        match (kind, library.as_deref()) {
            (RoleKind::Manager, Some(lib)) if !lib.is_empty() => Ok(Self::Manager(lib.to_string())),
            (RoleKind::Librarian, Some(lib)) if !lib.is_empty() => {
                Ok(Self::Librarian(lib.to_string()))
            }
            (RoleKind::Manager | RoleKind::Librarian, _) => {
                Err(invalid("per-library role requires a library"))
            }
            (_, Some(_)) => Err(invalid("global role cannot name a library")),
            (RoleKind::System, None) => Ok(Self::System),
            (RoleKind::ManagerAll, None) => Ok(Self::ManagerAll),
            (RoleKind::LibrarianAll, None) => Ok(Self::LibrarianAll),
        }
    }
}

impl From<Role> for RoleRecord {
    fn from(role: Role) -> Self {
        role.to_record()
    }
}
