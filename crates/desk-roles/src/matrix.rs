//! The role reconciler: one checkbox click in, one minimal role set out.

use desk_core::Role;
use desk_core::enums::Capability;

use crate::{RoleCommand, RoleSet};

/// The set of libraries an admin's roles range over.
///
/// Demoting a blanket grant for one library has to spell the grant out for
/// every other library, so the reconciler needs the full roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMatrix {
    libraries: Vec<String>,
}

impl RoleMatrix {
    /// Build a matrix over `libraries`, keeping the first occurrence of each name.
    pub fn new<I, S>(libraries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster: Vec<String> = Vec::new();
        for library in libraries {
            let library = library.into();
            if !roster.contains(&library) {
                roster.push(library);
            }
        }
        Self { libraries: roster }
    }

    #[must_use]
    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    /// Every checkbox of the form, in display order.
    #[must_use]
    pub fn commands(&self) -> Vec<RoleCommand> {
        let mut commands = vec![
            RoleCommand::ToggleSystem,
            RoleCommand::ToggleManagerAll,
            RoleCommand::ToggleLibrarianAll,
        ];
        for library in &self.libraries {
            commands.push(RoleCommand::ToggleManager(library.clone()));
            commands.push(RoleCommand::ToggleLibrarian(library.clone()));
        }
        commands
    }

    /// Checked state of every checkbox for `roles`.
    #[must_use]
    pub fn checkbox_states(&self, roles: &RoleSet) -> Vec<(RoleCommand, bool)> {
        self.commands()
            .into_iter()
            .map(|command| {
                let checked = command.is_checked(roles);
                (command, checked)
            })
            .collect()
    }

    /// Apply one toggle to `roles` and return the resulting minimal set.
    ///
    /// ```text
    /// command          checked                       unchecked
    /// system           ∅                             {system}
    /// manager-all      {librarian-all}               {manager-all}
    /// librarian-all    managers only                 managers + librarian-all
    /// manager-L        demote manager L              entries for L → manager-L
    /// librarian-L      demote librarian L            + librarian-L
    /// ```
    #[must_use]
    pub fn apply(&self, roles: &RoleSet, command: &RoleCommand) -> RoleSet {
        let checked = command.is_checked(roles);

        let next = match command {
            RoleCommand::ToggleSystem => {
                if checked {
                    Vec::new()
                } else {
                    vec![Role::System]
                }
            }
            RoleCommand::ToggleManagerAll => {
                if checked {
                    vec![Role::LibrarianAll]
                } else {
                    vec![Role::ManagerAll]
                }
            }
            RoleCommand::ToggleLibrarianAll => {
                let mut next: Vec<Role> = roles.managers().cloned().collect();
                if !checked {
                    next.push(Role::LibrarianAll);
                }
                next
            }
            RoleCommand::ToggleManager(library) => {
                if checked {
                    self.demote_manager(roles, library)
                } else {
                    let mut next = roles.without_library(library);
                    next.push(Role::Manager(library.clone()));
                    next
                }
            }
            RoleCommand::ToggleLibrarian(library) => {
                if checked {
                    self.demote_librarian(roles, library)
                } else {
                    let mut next = roles.as_slice().to_vec();
                    next.push(Role::Librarian(library.clone()));
                    next
                }
            }
        };

        let next = RoleSet::from_roles(next);
        tracing::debug!(
            %command,
            checked,
            before = roles.len(),
            after = next.len(),
            "applied role toggle"
        );
        next
    }

    /// Remove manager access to `library`, keeping librarian access there.
    fn demote_manager(&self, roles: &RoleSet, library: &str) -> Vec<Role> {
        if roles.is_granted(Capability::Manager, None) {
            return self
                .other_libraries(library)
                .map(|other| Role::Manager(other.to_string()))
                .chain(std::iter::once(Role::LibrarianAll))
                .collect();
        }

        let mut next = roles.without_library(library);
        if !roles.is_granted(Capability::Librarian, None) {
            next.push(Role::Librarian(library.to_string()));
        }
        next
    }

    /// Remove all access to `library`.
    fn demote_librarian(&self, roles: &RoleSet, library: &str) -> Vec<Role> {
        if !roles.is_granted(Capability::Librarian, None) {
            return roles.without_library(library);
        }

        if roles.is_granted(Capability::Manager, None) {
            return self
                .other_libraries(library)
                .map(|other| Role::Manager(other.to_string()))
                .collect();
        }

        // Only librarian-all is active. Explicit managers elsewhere survive;
        // normalization drops the librarian entries they already cover.
        roles
            .managers()
            .filter(|role| role.library() != Some(library))
            .cloned()
            .chain(
                self.other_libraries(library)
                    .map(|other| Role::Librarian(other.to_string())),
            )
            .collect()
    }

    fn other_libraries<'a>(&'a self, library: &'a str) -> impl Iterator<Item = &'a str> {
        self.libraries
            .iter()
            .map(String::as_str)
            .filter(move |other| *other != library)
    }
}
