//! # desk-core
//!
//! Core types, wire records, and error types for circdesk.
//!
//! This crate provides the vocabulary shared across all circdesk crates:
//! - Admin roles and their `{role, library?}` wire records
//! - Capabilities and drag-and-drop panel identifiers
//! - Custom list entries, search-result books, and collections
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod roles;

pub use errors::CoreError;
pub use roles::{Role, RoleRecord};
