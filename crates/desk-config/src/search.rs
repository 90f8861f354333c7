//! Catalog search configuration.

use desk_core::entities::IdentifierPath;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_identifier_field() -> String {
    IdentifierPath::default().field
}

fn default_identifier_value_key() -> String {
    IdentifierPath::default().value_key
}

fn default_entry_point() -> String {
    "all".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Raw feed field holding a search result's identifier.
    #[serde(default = "default_identifier_field")]
    pub identifier_field: String,

    /// Key inside the first element of `identifier_field` holding the value.
    #[serde(default = "default_identifier_value_key")]
    pub identifier_value_key: String,

    /// Entry point selected when a list editor opens.
    #[serde(default = "default_entry_point")]
    pub default_entry_point: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            identifier_field: default_identifier_field(),
            identifier_value_key: default_identifier_value_key(),
            default_entry_point: default_entry_point(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn identifier_path(&self) -> IdentifierPath {
        IdentifierPath::new(&self.identifier_field, &self.identifier_value_key)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("search.identifier_field", &self.identifier_field),
            ("search.identifier_value_key", &self.identifier_value_key),
        ] {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "must not be empty".into(),
                });
            }
        }
        Ok(())
    }
}
