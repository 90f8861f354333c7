use anyhow::{Context, bail};
use desk_config::DeskConfig;
use desk_core::enums::Capability;
use desk_roles::{RoleCommand, RoleMatrix, RoleSet};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{RolesCheckArgs, RolesCommands, RolesMatrixArgs, RolesToggleArgs};
use crate::commands::shared::input::read_json;
use crate::output::output;

/// One checkbox of the admin role matrix.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckboxState {
    pub toggle: String,
    pub checked: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GrantResponse {
    pub capability: Capability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    pub granted: bool,
}

/// Handle `circdesk roles`.
pub fn handle(action: &RolesCommands, config: &DeskConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RolesCommands::Toggle(args) => output(&toggle(args, config)?, flags.format),
        RolesCommands::Matrix(args) => output(&matrix(args, config)?, flags.format),
        RolesCommands::Check(args) => output(&check(args)?, flags.format),
    }
}

fn roster(libraries: &[String], config: &DeskConfig) -> anyhow::Result<RoleMatrix> {
    let names = if libraries.is_empty() {
        &config.libraries.roster
    } else {
        libraries
    };
    if names.is_empty() {
        bail!("no libraries known: pass --library or set libraries.roster in the config");
    }
    Ok(RoleMatrix::new(names.iter().map(String::as_str)))
}

fn parse_toggle(name: &str, matrix: &RoleMatrix) -> anyhow::Result<RoleCommand> {
    let command: RoleCommand = name
        .parse()
        .with_context(|| format!("invalid --toggle '{name}'"))?;
    if let Some(library) = command.library() {
        if !matrix.libraries().iter().any(|l| l == library) {
            bail!("--toggle '{name}' names library '{library}' outside the roster");
        }
    }
    Ok(command)
}

/// Click each toggle in order, starting from the roles in the input file.
pub fn toggle(args: &RolesToggleArgs, config: &DeskConfig) -> anyhow::Result<RoleSet> {
    let matrix = roster(&args.libraries, config)?;
    let commands = args
        .toggles
        .iter()
        .map(|name| parse_toggle(name, &matrix))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut roles: RoleSet = read_json(&args.roles)?;
    for command in &commands {
        roles = matrix.apply(&roles, command);
    }
    Ok(roles)
}

pub fn matrix(args: &RolesMatrixArgs, config: &DeskConfig) -> anyhow::Result<Vec<CheckboxState>> {
    let matrix = roster(&args.libraries, config)?;
    let roles: RoleSet = read_json(&args.roles)?;
    Ok(matrix
        .checkbox_states(&roles)
        .into_iter()
        .map(|(command, checked)| CheckboxState {
            toggle: command.to_string(),
            checked,
        })
        .collect())
}

pub fn check(args: &RolesCheckArgs) -> anyhow::Result<GrantResponse> {
    let roles: RoleSet = read_json(&args.roles)?;
    let capability = Capability::from(args.capability);
    Ok(GrantResponse {
        capability,
        library: args.library.clone(),
        granted: roles.is_granted(capability, args.library.as_deref()),
    })
}
