//! The minimal, normalized set of grants held by one admin.

use desk_core::enums::Capability;
use desk_core::{Role, RoleRecord};
use serde::{Deserialize, Serialize};

/// An ordered set of roles with no duplicates and no redundant entries.
///
/// Order is insertion order and is kept because the set is sent back to the
/// server as an ordered list of records. Every constructor normalizes, so a
/// `RoleSet` can never hold an entry implied by another one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Role>", into = "Vec<Role>")]
pub struct RoleSet {
    roles: Vec<Role>,
}

impl RoleSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { roles: Vec::new() }
    }

    /// Build a set from arbitrary roles, dropping duplicates and implied entries.
    #[must_use]
    pub fn from_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: normalize(roles),
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Role] {
        &self.roles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Role> {
        self.roles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    #[must_use]
    pub fn contains(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// Whether any role in the set grants `capability`.
    ///
    /// `library = None` asks about the blanket grant for every library.
    #[must_use]
    pub fn is_granted(&self, capability: Capability, library: Option<&str>) -> bool {
        self.roles
            .iter()
            .any(|role| role.grants(capability, library))
    }

    /// Same roles regardless of order.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.len() == other.len() && self.roles.iter().all(|role| other.contains(role))
    }

    /// Explicit per-library manager grants, in set order.
    pub fn managers(&self) -> impl Iterator<Item = &Role> {
        self.roles
            .iter()
            .filter(|role| matches!(role, Role::Manager(_)))
    }

    /// Every role not scoped to `library`.
    #[must_use]
    pub fn without_library(&self, library: &str) -> Vec<Role> {
        self.roles
            .iter()
            .filter(|role| role.library() != Some(library))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn to_records(&self) -> Vec<RoleRecord> {
        self.roles.iter().map(Role::to_record).collect()
    }
}

impl From<Vec<Role>> for RoleSet {
    fn from(roles: Vec<Role>) -> Self {
        Self::from_roles(roles)
    }
}

impl From<RoleSet> for Vec<Role> {
    fn from(set: RoleSet) -> Self {
        set.roles
    }
}

impl<'a> IntoIterator for &'a RoleSet {
    type Item = &'a Role;
    type IntoIter = std::slice::Iter<'a, Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn normalize(roles: impl IntoIterator<Item = Role>) -> Vec<Role> {
    let mut unique: Vec<Role> = Vec::new();
    for role in roles {
        if !unique.contains(&role) {
            unique.push(role);
        }
    }

    unique
        .iter()
        .filter(|role| !unique.iter().any(|other| other.implies(role)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn manager(library: &str) -> Role {
        Role::Manager(library.to_string())
    }

    fn librarian(library: &str) -> Role {
        Role::Librarian(library.to_string())
    }

    #[test]
    fn drops_duplicates_keeping_first_position() {
        let set = RoleSet::from_roles([librarian("bpl"), manager("nypl"), librarian("bpl")]);
        assert_eq!(set.as_slice(), &[librarian("bpl"), manager("nypl")]);
    }

    #[test]
    fn system_absorbs_everything() {
        let set = RoleSet::from_roles([manager("nypl"), Role::System, Role::LibrarianAll]);
        assert_eq!(set.as_slice(), &[Role::System]);
    }

    #[test]
    fn manager_all_absorbs_librarian_all_and_per_library_roles() {
        let set = RoleSet::from_roles([
            Role::LibrarianAll,
            manager("nypl"),
            Role::ManagerAll,
            librarian("bpl"),
        ]);
        assert_eq!(set.as_slice(), &[Role::ManagerAll]);
    }

    #[test]
    fn librarian_all_keeps_managers() {
        let set = RoleSet::from_roles([librarian("nypl"), manager("bpl"), Role::LibrarianAll]);
        assert_eq!(set.as_slice(), &[manager("bpl"), Role::LibrarianAll]);
    }

    #[test]
    fn manager_absorbs_own_librarian_only() {
        let set = RoleSet::from_roles([librarian("nypl"), librarian("bpl"), manager("nypl")]);
        assert_eq!(set.as_slice(), &[librarian("bpl"), manager("nypl")]);
    }

    #[test]
    fn deserializing_normalizes() {
        let set: RoleSet = serde_json::from_str(
            r#"[{"role":"manager","library":"nypl"},{"role":"librarian","library":"nypl"}]"#,
        )
        .unwrap();
        assert_eq!(set.as_slice(), &[manager("nypl")]);
    }

    #[test]
    fn serializes_as_ordered_records() {
        let set = RoleSet::from_roles([Role::LibrarianAll, manager("nypl")]);
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"[{"role":"librarian-all"},{"role":"manager","library":"nypl"}]"#
        );
    }

    #[test]
    fn is_granted_blanket_queries() {
        let set = RoleSet::from_roles([manager("nypl"), Role::LibrarianAll]);
        assert!(set.is_granted(Capability::Librarian, None));
        assert!(!set.is_granted(Capability::Manager, None));
        assert!(set.is_granted(Capability::Manager, Some("nypl")));
        assert!(!set.is_granted(Capability::Manager, Some("bpl")));
        assert!(set.is_granted(Capability::Librarian, Some("bpl")));
        assert!(!set.is_granted(Capability::System, None));
    }

    #[test]
    fn empty_set_grants_nothing() {
        let set = RoleSet::new();
        assert!(set.is_empty());
        assert!(!set.is_granted(Capability::Librarian, Some("nypl")));
        assert!(!set.is_granted(Capability::System, None));
    }

    #[test]
    fn equivalence_ignores_order() {
        let a = RoleSet::from_roles([manager("nypl"), manager("bpl")]);
        let b = RoleSet::from_roles([manager("bpl"), manager("nypl")]);
        assert!(a.is_equivalent(&b));
        assert_ne!(a, b);
        assert!(!a.is_equivalent(&RoleSet::from_roles([manager("nypl")])));
    }

    #[test]
    fn without_library_strips_both_kinds() {
        let set = RoleSet::from_roles([manager("nypl"), librarian("bpl"), Role::LibrarianAll]);
        assert_eq!(set.without_library("nypl"), vec![Role::LibrarianAll]);
    }
}
