//! Behavior of the role matrix as seen through the admin form's checkboxes.
//!
//! Each case starts from a role payload, clicks one checkbox, and lists which
//! checkboxes end up checked.

use desk_core::Role;
use desk_core::enums::Capability;
use desk_roles::{RoleCommand, RoleMatrix, RoleSet};
use pretty_assertions::assert_eq;
use rstest::rstest;

const NONE: &str = "[]";
const SYSTEM: &str = r#"[{"role":"system"}]"#;
const MANAGER_ALL: &str = r#"[{"role":"manager-all"}]"#;
const LIBRARIAN_ALL: &str = r#"[{"role":"librarian-all"}]"#;
const NYPL_MANAGER: &str = r#"[{"role":"manager","library":"nypl"}]"#;
const NYPL_LIBRARIAN: &str = r#"[{"role":"librarian","library":"nypl"}]"#;
const BPL_LIBRARIAN: &str = r#"[{"role":"librarian","library":"bpl"}]"#;
const NYPL_MANAGER_LIBRARIAN_ALL: &str =
    r#"[{"role":"manager","library":"nypl"},{"role":"librarian-all"}]"#;

const ALL_BUT_SYSTEM: &[&str] = &[
    "manager-all",
    "librarian-all",
    "manager-nypl",
    "librarian-nypl",
    "manager-bpl",
    "librarian-bpl",
];
const EVERY_LIBRARIAN: &[&str] = &["librarian-all", "librarian-nypl", "librarian-bpl"];

fn matrix() -> RoleMatrix {
    RoleMatrix::new(["nypl", "bpl"])
}

fn roles(json: &str) -> RoleSet {
    serde_json::from_str(json).expect("role payload should decode")
}

fn checked(matrix: &RoleMatrix, roles: &RoleSet) -> Vec<String> {
    matrix
        .checkbox_states(roles)
        .into_iter()
        .filter(|(_, checked)| *checked)
        .map(|(command, _)| command.to_string())
        .collect()
}

fn sorted(names: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = names.iter().map(ToString::to_string).collect();
    names.sort();
    names
}

fn click(start: &str, toggle: &str) -> Vec<String> {
    let matrix = matrix();
    let command: RoleCommand = toggle.parse().expect("toggle should parse");
    let next = matrix.apply(&roles(start), &command);
    let mut names = checked(&matrix, &next);
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[rstest]
#[case(NONE, &[])]
#[case(SYSTEM, &["system", "manager-all", "librarian-all", "manager-nypl", "librarian-nypl", "manager-bpl", "librarian-bpl"])]
#[case(MANAGER_ALL, ALL_BUT_SYSTEM)]
#[case(LIBRARIAN_ALL, EVERY_LIBRARIAN)]
#[case(NYPL_MANAGER, &["manager-nypl", "librarian-nypl"])]
#[case(NYPL_LIBRARIAN, &["librarian-nypl"])]
#[case(
    r#"[{"role":"manager","library":"nypl"},{"role":"manager","library":"bpl"}]"#,
    &["manager-nypl", "librarian-nypl", "manager-bpl", "librarian-bpl"]
)]
fn renders_checkboxes(#[case] start: &str, #[case] expected: &[&str]) {
    let mut names = checked(&matrix(), &roles(start));
    names.sort();
    assert_eq!(names, sorted(expected));
}

// ---------------------------------------------------------------------------
// Toggling
// ---------------------------------------------------------------------------

#[rstest]
#[case(NYPL_MANAGER_LIBRARIAN_ALL, "system", &["system", "manager-all", "librarian-all", "manager-nypl", "librarian-nypl", "manager-bpl", "librarian-bpl"])]
#[case(SYSTEM, "system", &[])]
#[case(NONE, "manager-all", ALL_BUT_SYSTEM)]
#[case(MANAGER_ALL, "manager-all", EVERY_LIBRARIAN)]
#[case(SYSTEM, "manager-all", EVERY_LIBRARIAN)]
#[case(NYPL_MANAGER_LIBRARIAN_ALL, "manager-all", ALL_BUT_SYSTEM)]
#[case(NONE, "librarian-all", EVERY_LIBRARIAN)]
#[case(LIBRARIAN_ALL, "librarian-all", &[])]
#[case(SYSTEM, "librarian-all", &[])]
#[case(NYPL_MANAGER_LIBRARIAN_ALL, "librarian-all", &["manager-nypl", "librarian-nypl"])]
#[case(NYPL_LIBRARIAN, "librarian-all", EVERY_LIBRARIAN)]
#[case(NONE, "manager-nypl", &["manager-nypl", "librarian-nypl"])]
#[case(NYPL_MANAGER, "manager-nypl", &["librarian-nypl"])]
#[case(SYSTEM, "manager-nypl", &["librarian-all", "manager-bpl", "librarian-nypl", "librarian-bpl"])]
#[case(MANAGER_ALL, "manager-nypl", &["librarian-all", "manager-bpl", "librarian-nypl", "librarian-bpl"])]
#[case(NYPL_MANAGER_LIBRARIAN_ALL, "manager-nypl", EVERY_LIBRARIAN)]
#[case(NYPL_LIBRARIAN, "manager-nypl", &["manager-nypl", "librarian-nypl"])]
#[case(BPL_LIBRARIAN, "manager-nypl", &["manager-nypl", "librarian-nypl", "librarian-bpl"])]
#[case(NONE, "librarian-nypl", &["librarian-nypl"])]
#[case(NYPL_LIBRARIAN, "librarian-nypl", &[])]
#[case(SYSTEM, "librarian-nypl", &["manager-bpl", "librarian-bpl"])]
#[case(MANAGER_ALL, "librarian-nypl", &["manager-bpl", "librarian-bpl"])]
#[case(NYPL_MANAGER_LIBRARIAN_ALL, "librarian-nypl", &["librarian-bpl"])]
#[case(BPL_LIBRARIAN, "librarian-nypl", &["librarian-nypl", "librarian-bpl"])]
fn toggles_checkbox(#[case] start: &str, #[case] toggle: &str, #[case] expected: &[&str]) {
    assert_eq!(click(start, toggle), sorted(expected));
}

#[test]
fn system_scenario_round_trips_payload() {
    let matrix = matrix();
    let off = matrix.apply(&roles(SYSTEM), &RoleCommand::ToggleSystem);
    assert_eq!(serde_json::to_string(&off).unwrap(), "[]");
    let on = matrix.apply(&off, &RoleCommand::ToggleSystem);
    assert_eq!(serde_json::to_string(&on).unwrap(), SYSTEM);
}

#[test]
fn submitted_payload_keeps_click_order() {
    let matrix = matrix();
    let roles = matrix.apply(&RoleSet::new(), &RoleCommand::ToggleLibrarianAll);
    let roles = matrix.apply(&roles, &RoleCommand::ToggleManager("nypl".into()));
    assert_eq!(
        serde_json::to_string(&roles).unwrap(),
        r#"[{"role":"librarian-all"},{"role":"manager","library":"nypl"}]"#
    );
}

#[test]
fn manager_access_survives_demotion_and_repromotion() {
    let matrix = matrix();
    let start = roles(MANAGER_ALL);
    let demoted = matrix.apply(&start, &RoleCommand::ToggleManager("nypl".into()));
    let restored = matrix.apply(&demoted, &RoleCommand::ToggleManager("nypl".into()));

    for library in matrix.libraries() {
        assert!(restored.is_granted(Capability::Manager, Some(library.as_str())));
    }
    assert!(!restored.is_equivalent(&start));
}

#[test]
fn unrelated_partial_state_survives() {
    let matrix = matrix();
    let start = RoleSet::from_roles([Role::Manager("nypl".into()), Role::Librarian("bpl".into())]);
    let next = matrix.apply(&start, &RoleCommand::ToggleLibrarian("qpl".into()));
    assert_eq!(
        next.as_slice(),
        &[
            Role::Manager("nypl".into()),
            Role::Librarian("bpl".into()),
            Role::Librarian("qpl".into()),
        ]
    );
}

// ---------------------------------------------------------------------------
// Invariants over every reachable starting set
// ---------------------------------------------------------------------------

fn universe() -> Vec<Role> {
    vec![
        Role::System,
        Role::ManagerAll,
        Role::LibrarianAll,
        Role::Manager("nypl".into()),
        Role::Manager("bpl".into()),
        Role::Librarian("nypl".into()),
        Role::Librarian("bpl".into()),
    ]
}

fn every_role_set() -> Vec<RoleSet> {
    let universe = universe();
    (0..1u32 << universe.len())
        .map(|mask| {
            RoleSet::from_roles(
                universe
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, role)| role.clone()),
            )
        })
        .collect()
}

#[test]
fn results_are_always_minimal() {
    let matrix = matrix();
    for start in every_role_set() {
        for command in matrix.commands() {
            let next = matrix.apply(&start, &command);
            for role in &next {
                assert!(
                    !next.iter().any(|other| other.implies(role)),
                    "{command} on {start:?} left redundant {role}"
                );
            }
        }
    }
}

#[test]
fn every_toggle_flips_its_own_checkbox() {
    let matrix = matrix();
    for start in every_role_set() {
        for command in matrix.commands() {
            let before = command.is_checked(&start);
            let after = command.is_checked(&matrix.apply(&start, &command));
            assert_ne!(before, after, "{command} on {start:?}");
        }
    }
}

#[test]
fn per_library_toggles_leave_other_libraries_alone() {
    let matrix = matrix();
    for start in every_role_set() {
        for command in matrix.commands() {
            let Some(library) = command.library() else {
                continue;
            };
            let next = matrix.apply(&start, &command);
            for other in matrix.libraries().iter().filter(|l| *l != library) {
                for capability in [Capability::Manager, Capability::Librarian] {
                    assert_eq!(
                        start.is_granted(capability, Some(other.as_str())),
                        next.is_granted(capability, Some(other.as_str())),
                        "{command} on {start:?} changed {capability} for {other}"
                    );
                }
            }
        }
    }
}

#[test]
fn manager_grant_matches_role_presence() {
    let matrix = matrix();
    for start in every_role_set() {
        for command in matrix.commands() {
            let next = matrix.apply(&start, &command);
            for library in matrix.libraries() {
                let explicit = next.contains(&Role::System)
                    || next.contains(&Role::ManagerAll)
                    || next.contains(&Role::Manager(library.clone()));
                assert_eq!(next.is_granted(Capability::Manager, Some(library.as_str())), explicit);
            }
        }
    }
}
