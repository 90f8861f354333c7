use std::str::FromStr;

use anyhow::{Context, bail};
use desk_config::DeskConfig;
use desk_core::entities::{ListEntry, SearchResults};
use desk_core::enums::Droppable;
use desk_lists::{ListEditor, ListReconciler};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ListApplyArgs, ListCommands, ListPendingArgs, ListSearchUrlArgs};
use crate::commands::shared::input::read_json;
use crate::output::output;

/// One membership command given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOp {
    Add(String),
    Remove(String),
    AddAll,
    RemoveAll,
    /// `to = None` is a drop outside both panels.
    Drag {
        identifier: String,
        from: Droppable,
        to: Option<Droppable>,
    },
}

impl FromStr for ListOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add-all" => return Ok(Self::AddAll),
            "remove-all" => return Ok(Self::RemoveAll),
            _ => {}
        }

        if let Some(identifier) = s.strip_prefix("add:") {
            return Ok(Self::Add(non_empty(identifier, s)?));
        }
        if let Some(identifier) = s.strip_prefix("remove:") {
            return Ok(Self::Remove(non_empty(identifier, s)?));
        }
        if let Some(rest) = s.strip_prefix("drag:") {
            // Identifiers may contain ':', so panels are split off the right.
            let (rest, to) = rest
                .rsplit_once(':')
                .with_context(|| format!("drag op '{s}' needs <id>:<from>:<to>"))?;
            let (identifier, from) = rest
                .rsplit_once(':')
                .with_context(|| format!("drag op '{s}' needs <id>:<from>:<to>"))?;
            let to = match to {
                "none" => None,
                panel => Some(panel.parse::<Droppable>()?),
            };
            return Ok(Self::Drag {
                identifier: non_empty(identifier, s)?,
                from: from.parse()?,
                to,
            });
        }

        bail!("unknown list op '{s}'")
    }
}

fn non_empty(identifier: &str, op: &str) -> anyhow::Result<String> {
    if identifier.is_empty() {
        bail!("list op '{op}' is missing an identifier");
    }
    Ok(identifier.to_string())
}

impl ListOp {
    fn apply(&self, reconciler: &mut ListReconciler) {
        match self {
            Self::Add(identifier) => {
                reconciler.add(identifier);
            }
            Self::Remove(identifier) => {
                reconciler.remove(identifier);
            }
            Self::AddAll => {
                reconciler.add_all();
            }
            Self::RemoveAll => {
                reconciler.remove_all();
            }
            Self::Drag {
                identifier,
                from,
                to,
            } => {
                reconciler.begin_drag(*from);
                reconciler.end_drag(identifier, *from, *to);
            }
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ListApplyResponse {
    pub entries: Vec<ListEntry>,
    pub pending: Vec<ListEntry>,
    pub has_changes: bool,
}

/// Handle `circdesk list`.
pub fn handle(action: &ListCommands, config: &DeskConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ListCommands::Pending(args) => output(&pending(args, config)?, flags.format),
        ListCommands::Apply(args) => output(&apply(args, config)?, flags.format),
        ListCommands::SearchUrl(args) => output(&search_url(args, config), flags.format),
    }
}

fn open(
    entries: &std::path::Path,
    results: &std::path::Path,
    config: &DeskConfig,
) -> anyhow::Result<ListReconciler> {
    let entries: Vec<ListEntry> = read_json(entries)?;
    let results: SearchResults = read_json(results)?;
    let mut reconciler = ListReconciler::new(entries, config.identifier_path());
    reconciler.set_search_results(results);
    Ok(reconciler)
}

fn pending_entries(reconciler: &ListReconciler) -> Vec<ListEntry> {
    let path = reconciler.identifier_path();
    reconciler
        .not_yet_in_list()
        .into_iter()
        .filter_map(|book| book.identifier(path).map(|id| book.to_entry(id)))
        .collect()
}

/// Search results not yet in the list, in page order.
pub fn pending(args: &ListPendingArgs, config: &DeskConfig) -> anyhow::Result<Vec<ListEntry>> {
    let reconciler = open(&args.entries, &args.results, config)?;
    Ok(pending_entries(&reconciler))
}

pub fn apply(args: &ListApplyArgs, config: &DeskConfig) -> anyhow::Result<ListApplyResponse> {
    let ops = args
        .ops
        .iter()
        .map(|op| op.parse::<ListOp>())
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut reconciler = open(&args.entries, &args.results, config)?;
    for op in &ops {
        op.apply(&mut reconciler);
    }

    Ok(ListApplyResponse {
        pending: pending_entries(&reconciler),
        has_changes: reconciler.has_changes(),
        entries: reconciler.entries().to_vec(),
    })
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SearchUrlResponse {
    pub url: String,
}

/// Search URL for a new list in `args.library`.
pub fn search_url(args: &ListSearchUrlArgs, config: &DeskConfig) -> SearchUrlResponse {
    let mut editor = ListEditor::new(&args.library, None, config.identifier_path());
    editor.select_entry_point(
        args.entry_point
            .as_deref()
            .unwrap_or(&config.search.default_entry_point),
    );
    SearchUrlResponse {
        url: editor.search_url(&args.terms),
    }
}
