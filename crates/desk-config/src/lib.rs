//! # desk-config
//!
//! Layered configuration loading for circdesk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CIRCDESK_*` prefix, `__` as separator)
//! 2. Project-level `.circdesk/config.toml`
//! 3. User-level `~/.config/circdesk/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `CIRCDESK_SEARCH__IDENTIFIER_FIELD` -> `search.identifier_field`.
//!
//! ```no_run
//! use desk_config::DeskConfig;
//!
//! let config = DeskConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! for library in &config.libraries.roster {
//!     println!("{library}");
//! }
//! ```

mod error;
mod libraries;
mod search;

pub use error::ConfigError;
pub use libraries::LibrariesConfig;
pub use search::SearchConfig;

use desk_core::entities::IdentifierPath;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Relative path of the project-level config file.
pub const LOCAL_CONFIG_PATH: &str = ".circdesk/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub libraries: LibrariesConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl DeskConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory (if any), then [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and callers can layer extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CIRCDESK_").split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("circdesk").join("config.toml"))
    }

    /// Check values figment cannot check by type alone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.libraries.validate()?;
        self.search.validate()
    }

    /// Where search results keep the identifier that joins them to list entries.
    #[must_use]
    pub fn identifier_path(&self) -> IdentifierPath {
        self.search.identifier_path()
    }
}
