use clap::Subcommand;

use crate::cli::subcommands::{ListCommands, RolesCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Admin role matrix.
    Roles {
        #[command(subcommand)]
        action: RolesCommands,
    },
    /// Custom list entries.
    List {
        #[command(subcommand)]
        action: ListCommands,
    },
}
