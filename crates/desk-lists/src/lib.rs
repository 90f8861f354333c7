//! # desk-lists
//!
//! Custom list membership reconciliation for circdesk.
//!
//! A librarian curates a list by moving books between two panels: the current
//! page of search results and the list's entries. [`ListReconciler`] keeps the
//! two views disjoint, applies add/remove/add-all/remove-all commands, and
//! tracks the two-phase drag gesture. [`ListEditor`] wraps it with the rest of
//! a list's editable state (name, feeding collections, search entry point).
//!
//! Both are synchronous and exclusively owned by one editing session. Fetching
//! search pages and saving lists happens outside this crate; callers hand the
//! results in and read snapshots back out.

mod changes;
mod drag;
pub mod editor;
mod reconciler;

pub use changes::{collections_changed, entries_changed, not_yet_in_list};
pub use drag::DragState;
pub use editor::{ListEditor, ListSavePayload};
pub use reconciler::ListReconciler;
