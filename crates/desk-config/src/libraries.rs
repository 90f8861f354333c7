//! Library roster configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LibrariesConfig {
    /// Short names of every library the console manages, in display order.
    #[serde(default)]
    pub roster: Vec<String>,
}

impl LibrariesConfig {
    pub fn is_configured(&self) -> bool {
        !self.roster.is_empty()
    }

    /// Reject blank or repeated short names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, name) in self.roster.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("libraries.roster[{index}]"),
                    reason: "library short name is blank".into(),
                });
            }
            if self.roster[..index].contains(name) {
                return Err(ConfigError::DuplicateLibrary {
                    name: name.clone(),
                    position: index,
                });
            }
        }
        Ok(())
    }
}
