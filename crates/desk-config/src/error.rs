//! Errors raised while loading or checking circdesk configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed to read, merge, or extract.
    #[error("circdesk config could not be loaded: {0}")]
    Figment(#[from] figment::Error),

    /// The roster names the same library more than once.
    #[error("library '{name}' appears twice in libraries.roster (position {position})")]
    DuplicateLibrary { name: String, position: usize },

    /// A field parsed but holds a value the reconcilers cannot use.
    #[error("config field '{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
