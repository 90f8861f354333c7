use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Custom list entry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ListCommands {
    /// Print the search results not yet in the list.
    Pending(ListPendingArgs),
    /// Apply membership operations and print the resulting entries.
    Apply(ListApplyArgs),
    /// Print the catalog search URL the list editor would request.
    SearchUrl(ListSearchUrlArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ListPendingArgs {
    /// JSON file with the list's current entries.
    #[arg(long)]
    pub entries: PathBuf,
    /// JSON file with the current search results page.
    #[arg(long)]
    pub results: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ListApplyArgs {
    /// JSON file with the list's current entries.
    #[arg(long)]
    pub entries: PathBuf,
    /// JSON file with the current search results page.
    #[arg(long)]
    pub results: PathBuf,
    /// Operation: add:<id>, remove:<id>, add-all, remove-all, drag:<id>:<from>:<to>.
    #[arg(long = "op", required = true)]
    pub ops: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ListSearchUrlArgs {
    /// Library short name.
    #[arg(long)]
    pub library: String,
    /// Search terms.
    #[arg(long)]
    pub terms: String,
    /// Entry point (defaults to search.default_entry_point).
    #[arg(long)]
    pub entry_point: Option<String>,
}
