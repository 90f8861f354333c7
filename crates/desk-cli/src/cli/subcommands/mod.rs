mod list;
mod roles;

pub use list::{ListApplyArgs, ListCommands, ListPendingArgs, ListSearchUrlArgs};
pub use roles::{CapabilityArg, RolesCheckArgs, RolesCommands, RolesMatrixArgs, RolesToggleArgs};
