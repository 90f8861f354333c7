//! # desk-roles
//!
//! Role matrix reconciliation for circdesk admin accounts.
//!
//! The admin editor shows a matrix of checkboxes: a system-admin box, two
//! blanket boxes (library manager / librarian for every library), and one
//! manager and one librarian box per library. Each click is a [`RoleCommand`].
//! [`RoleMatrix::apply`] turns the admin's current [`RoleSet`] plus one command
//! into the next role set, always in minimal form.
//!
//! ```
//! use desk_roles::{RoleCommand, RoleMatrix, RoleSet};
//! use desk_core::Role;
//!
//! let matrix = RoleMatrix::new(["nypl", "bpl"]);
//! let roles = RoleSet::from_roles([Role::ManagerAll]);
//! let next = matrix.apply(&roles, &"manager-nypl".parse::<RoleCommand>().unwrap());
//!
//! assert_eq!(
//!     next.as_slice(),
//!     &[Role::Manager("bpl".into()), Role::LibrarianAll]
//! );
//! ```

mod command;
mod matrix;
mod role_set;

pub use command::RoleCommand;
pub use matrix::RoleMatrix;
pub use role_set::RoleSet;
