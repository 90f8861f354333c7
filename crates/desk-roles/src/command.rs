//! Checkbox toggles of the admin role matrix.

use std::fmt;
use std::str::FromStr;

use desk_core::CoreError;
use desk_core::enums::{Capability, RoleKind};

use crate::RoleSet;

/// One click on a role checkbox.
///
/// Parses from and displays as the checkbox names used by the admin form:
/// `system`, `manager-all`, `librarian-all`, `manager-<library>`,
/// `librarian-<library>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoleCommand {
    ToggleSystem,
    ToggleManagerAll,
    ToggleLibrarianAll,
    ToggleManager(String),
    ToggleLibrarian(String),
}

impl RoleCommand {
    /// The capability whose checkbox this command flips.
    #[must_use]
    pub const fn capability(&self) -> Capability {
        match self {
            Self::ToggleSystem => Capability::System,
            Self::ToggleManagerAll | Self::ToggleManager(_) => Capability::Manager,
            Self::ToggleLibrarianAll | Self::ToggleLibrarian(_) => Capability::Librarian,
        }
    }

    /// The library the checkbox belongs to; `None` for the global boxes.
    #[must_use]
    pub fn library(&self) -> Option<&str> {
        match self {
            Self::ToggleManager(library) | Self::ToggleLibrarian(library) => Some(library),
            Self::ToggleSystem | Self::ToggleManagerAll | Self::ToggleLibrarianAll => None,
        }
    }

    /// Whether this command's checkbox is currently checked for `roles`.
    #[must_use]
    pub fn is_checked(&self, roles: &RoleSet) -> bool {
        roles.is_granted(self.capability(), self.library())
    }
}

impl fmt::Display for RoleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToggleSystem => f.write_str(RoleKind::System.as_str()),
            Self::ToggleManagerAll => f.write_str(RoleKind::ManagerAll.as_str()),
            Self::ToggleLibrarianAll => f.write_str(RoleKind::LibrarianAll.as_str()),
            Self::ToggleManager(library) => write!(f, "{}-{library}", RoleKind::Manager),
            Self::ToggleLibrarian(library) => write!(f, "{}-{library}", RoleKind::Librarian),
        }
    }
}

impl FromStr for RoleCommand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidToggle(s.to_string());

        match s {
            "system" => return Ok(Self::ToggleSystem),
            "manager-all" => return Ok(Self::ToggleManagerAll),
            "librarian-all" => return Ok(Self::ToggleLibrarianAll),
            _ => {}
        }

        let (kind, library) = s.split_once('-').ok_or_else(invalid)?;
        if library.is_empty() {
            return Err(invalid());
        }
        match kind {
            "manager" => Ok(Self::ToggleManager(library.to_string())),
            "librarian" => Ok(Self::ToggleLibrarian(library.to_string())),
            _ => Err(invalid()),
        }
    }
}
