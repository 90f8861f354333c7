use desk_config::DeskConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &DeskConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Roles { action } => commands::roles::handle(action, config, flags),
        Commands::List { action } => commands::list::handle(action, config, flags),
    }
}
