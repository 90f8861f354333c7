//! Cross-cutting error types for circdesk.
//!
//! The reconcilers themselves are total and never fail. Errors only arise at
//! the boundary, when wire records or command names coming from outside are
//! decoded into typed values. Configuration errors live in `desk-config`.

use thiserror::Error;

/// Errors raised while decoding boundary input into core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A `{role, library?}` record does not describe a known role.
    #[error("Invalid role record: role={role:?} library={library:?}: {reason}")]
    InvalidRole {
        role: String,
        library: Option<String>,
        reason: String,
    },

    /// A role toggle name (e.g. `manager-nypl`) could not be parsed.
    #[error("Invalid role toggle: {0:?}")]
    InvalidToggle(String),

    /// A drag-and-drop panel identifier is not one of the known panels.
    #[error("Invalid droppable id: {0:?}")]
    InvalidDroppable(String),
}
