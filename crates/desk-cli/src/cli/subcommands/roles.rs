use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use desk_core::enums::Capability;

/// Role matrix commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RolesCommands {
    /// Click checkboxes in order and print the resulting roles.
    Toggle(RolesToggleArgs),
    /// Print the checked state of every checkbox.
    Matrix(RolesMatrixArgs),
    /// Check whether the roles grant a capability.
    Check(RolesCheckArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RolesToggleArgs {
    /// JSON file with the admin's role records.
    #[arg(long)]
    pub roles: PathBuf,
    /// Checkbox name to click (system, manager-all, manager-<library>, ...).
    #[arg(long = "toggle", required = true)]
    pub toggles: Vec<String>,
    /// Library short name (defaults to the configured roster).
    #[arg(long = "library")]
    pub libraries: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RolesMatrixArgs {
    /// JSON file with the admin's role records.
    #[arg(long)]
    pub roles: PathBuf,
    /// Library short name (defaults to the configured roster).
    #[arg(long = "library")]
    pub libraries: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RolesCheckArgs {
    /// JSON file with the admin's role records.
    #[arg(long)]
    pub roles: PathBuf,
    /// Capability to check.
    #[arg(long, value_enum)]
    pub capability: CapabilityArg,
    /// Library to check; omit to check the blanket grant.
    #[arg(long)]
    pub library: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CapabilityArg {
    System,
    Manager,
    Librarian,
}

impl From<CapabilityArg> for Capability {
    fn from(value: CapabilityArg) -> Self {
        match value {
            CapabilityArg::System => Self::System,
            CapabilityArg::Manager => Self::Manager,
            CapabilityArg::Librarian => Self::Librarian,
        }
    }
}
