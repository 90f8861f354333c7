mod config_warnings;

pub use config_warnings::warn_unconfigured;

use anyhow::Context;
use desk_config::DeskConfig;

/// Load `.env`, then the layered config, and reject invalid values.
pub fn load_config() -> anyhow::Result<DeskConfig> {
    let config = DeskConfig::load_with_dotenv().context("failed to load circdesk config")?;
    config
        .validate()
        .context("invalid circdesk configuration")?;
    Ok(config)
}
